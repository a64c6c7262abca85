// WASM entrypoint for Trunk.
//
// Native builds of this crate are no-ops; the real bindings are behind
// `--features web` and `wasm32`, and start themselves via `wasm_bindgen(start)`.

#[cfg(all(feature = "web", target_arch = "wasm32"))]
use hx_widgets_web as _;

fn main() {
    // No-op on native targets.
}
