pub mod cookies;
pub mod navigation;
#[cfg(target_arch = "wasm32")]
pub mod storage;
