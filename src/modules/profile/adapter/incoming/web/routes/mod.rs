pub mod employer_profile;
pub mod seeker_profile;
