//! Complaint 领域 - 申诉记录存储与详情面板
//!
//! - [`ComplaintRepository`] - 存储抽象 (list / add / find)
//! - [`InMemoryComplaintStore`] - 进程内存储，重启即丢失
//! - [`SelectionController`] - 当前选中的申诉与详情面板投影

mod seed;
pub mod selection;
pub mod store;

pub use selection::{DetailPane, SelectionController};
pub use store::{ComplaintRepository, InMemoryComplaintStore};
