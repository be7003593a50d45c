pub mod employer_profiles;
pub mod job_seeker_profiles;
