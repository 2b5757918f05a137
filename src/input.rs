//! Input documents read by the tools.
pub mod ressources;

pub use ressources::{
    ArticleEntry,
    ArticleRecord,
    MissingField,
    RessourcesDocument,
    RessourcesError,
    Slugged,
};
