pub mod boundary;
pub mod config;
pub mod core;
pub mod oracle;

pub use boundary::{
    convert_to_cyrillic_bounded, convert_to_latin_bounded, BoundaryError, BoundedOutput,
    CapacityMode, OverflowPolicy, Transliterator,
};
pub use config::{load_config, TranslitConfig};
pub use crate::core::converter::{
    convert_to_cyrillic, convert_to_latin, cyrillize, romanize, transliterate, Conversion,
};
pub use crate::core::tables::Script;
