//! Model layer - data and presentation state
//!
//! This module contains all state-related types:
//! - `SampleTable` - The immutable built-in dataset
//! - `FilterCriteria` / `FilteredView` - The filter engine
//! - `DashboardView` - Row count and chart data for one filter state
//! - `ModalStack` - Modal overlay management

pub mod dashboard;
pub mod filter;
pub mod modal;
pub mod sample;
pub mod ui;

pub use dashboard::DashboardView;
pub use sample::SampleTable;
