pub mod accessibility;
pub mod anti_bot;
pub mod heading_structure;
pub mod metadata;
pub mod readability;
pub mod semantic_html;
pub mod structured_data;
