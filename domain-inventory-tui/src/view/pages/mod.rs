pub mod domains;
