pub mod metadata;
pub mod quality;
pub mod schema;
pub mod validator;

pub use metadata::{MetadataGenerator, PageMetadata, PageMetadataInput};
pub use quality::ContentQualityScorer;
pub use schema::SchemaGenerator;
pub use validator::SeoValidator;
