mod paging;

pub use paging::{PageInfo, PageQuery, Paginated};
