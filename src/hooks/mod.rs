pub mod use_conversion;
