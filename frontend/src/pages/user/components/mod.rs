pub mod comments;
pub mod task_list;

pub use comments::CommentThread;
pub use task_list::MyTaskList;
