//! Trunk entry point. The library's `wasm_bindgen(start)` hook boots the app
//! once the module loads, so there is nothing left to do here.
use teamsync_frontend as _;

fn main() {}
