mod encoder;

pub use self::encoder::GzipEncoder;
