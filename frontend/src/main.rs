use imdb_admin_frontend::App;
use imdb_admin_frontend::web::MakeConsoleWriter;
use leptos::prelude::*;
use tracing::Level;

// Use lol_alloc as the global allocator for smaller WASM size
#[cfg(target_arch = "wasm32")]
use lol_alloc::{AssumeSingleThreaded, FreeListAllocator};

#[cfg(target_arch = "wasm32")]
#[global_allocator]
static ALLOCATOR: AssumeSingleThreaded<FreeListAllocator> =
    unsafe { AssumeSingleThreaded::new(FreeListAllocator::new()) };

const MAX_LEVEL: Level = if cfg!(debug_assertions) {
    Level::DEBUG
} else {
    Level::INFO
};

pub fn main() {
    console_error_panic_hook::set_once();

    // 浏览器没有可用的系统时钟格式化，省略时间戳
    tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_max_level(MAX_LEVEL)
        .without_time()
        .init();

    mount_to_body(App);
}
