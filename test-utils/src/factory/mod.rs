//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows and let the store assign
//! identities, so tests observe the same id semantics as the application.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let category = factory::category::create_category(&db).await?;
//!     let item = factory::item::create_item(&db, category.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::item::ItemFactory;
//!
//! let item = ItemFactory::new(&db, category.id)
//!     .name("Cable")
//!     .quantity(10)
//!     .build()
//!     .await?;
//! ```

pub mod category;
pub mod helpers;
pub mod item;

// Re-export commonly used factory functions for concise usage
pub use category::create_category;
pub use item::create_item;
