mod memory;
mod module;
mod process;
mod thread;

pub use memory::register_memory_ioctls;
pub use module::register_module_ioctls;
pub use process::register_process_ioctls;
pub use thread::register_thread_ioctls;
