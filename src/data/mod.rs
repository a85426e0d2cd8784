/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → PlayerDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ PlayerDataset │  Vec<PlayerRecord>, global bounds
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply FilterState → FilteredSubset
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
