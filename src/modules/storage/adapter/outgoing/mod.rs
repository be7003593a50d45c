pub mod asset_store_gcs;
