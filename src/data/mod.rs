/// Data layer: core types, loading, filtering, and export.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  ordered column schema, Vec<Row>
///   └──────────┘
///        │
///        ├──────────────────────┐
///        ▼                      ▼
///   ┌──────────┐          ┌──────────┐
///   │  filter   │          │  export   │
///   │ substring │          │ visible   │
///   │ criteria  │          │ cols→CSV  │
///   └──────────┘          └──────────┘
/// ```

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
