pub mod dark_mode;
