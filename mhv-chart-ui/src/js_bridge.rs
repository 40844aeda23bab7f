//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! vega, vega-lite and vega-embed are injected as `<script>` tags at startup,
//! in that order, since each one needs the previous to be loaded. Chart specs
//! are written straight into the evaluated source as JSON object literals.

use log::warn;
use mhv_dashboard::page::{script_json, VEGA_EMBED_JS, VEGA_JS, VEGA_LITE_JS};
use serde_json::Value;
use wasm_bindgen::JsValue;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('MHV JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        // Only syntax errors get past the try/catch.
        warn!("eval rejected generated JS: {}", describe(&e));
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Inject the vega scripts once. Sets `window.__mhvVegaReady` when vega-embed is usable.
pub fn init_vega() {
    let urls = serde_json::to_string(&[VEGA_JS, VEGA_LITE_JS, VEGA_EMBED_JS]).unwrap_or_default();
    call_js(&format!(
        r#"
        (function() {{
            if (window.__mhvVegaLoading) return;
            window.__mhvVegaLoading = true;
            var urls = {urls};
            function load(i) {{
                if (i >= urls.length) {{
                    window.__mhvVegaReady = true;
                    console.log('MHV vega-embed initialized');
                    return;
                }}
                var s = document.createElement('script');
                s.src = urls[i];
                s.onload = function() {{ load(i + 1); }};
                s.onerror = function() {{ console.error('[MHV] failed to load', urls[i]); }};
                document.head.appendChild(s);
            }}
            load(0);
        }})();
        "#,
    ));
}

/// Poll attempts (100ms apart) before an embed is given up.
const EMBED_MAX_ATTEMPTS: u32 = 150;

/// Embed a Vega-Lite spec into the element with id `container_id`.
///
/// Uses a polling loop to wait for the scripts to load and the container
/// DOM element to exist before rendering. At most one poll runs per
/// container: a newer spec replaces a pending one.
pub fn render_vega_chart(container_id: &str, spec: &Value) {
    call_js(&embed_script(container_id, &script_json(spec)));
}

fn embed_script(container_id: &str, spec_js: &str) -> String {
    let id_js = serde_json::to_string(container_id).unwrap_or_default();
    format!(
        r#"
        (function() {{
            var polls = window.__mhvVegaPolls = window.__mhvVegaPolls || {{}};
            var id = {id_js};
            if (polls[id]) clearInterval(polls[id]);
            var attempts = 0;
            polls[id] = setInterval(function() {{
                attempts++;
                var el = document.getElementById(id);
                if (window.__mhvVegaReady && typeof window.vegaEmbed !== 'undefined' && el) {{
                    clearInterval(polls[id]);
                    delete polls[id];
                    window.vegaEmbed(el, {spec_js}, {{ actions: false }})
                        .catch(function(e) {{ console.error('[MHV] vegaEmbed error:', e); }});
                }} else if (attempts >= {EMBED_MAX_ATTEMPTS}) {{
                    clearInterval(polls[id]);
                    delete polls[id];
                    console.warn('[MHV] gave up waiting to embed', id);
                }}
            }}, 100);
        }})();
        "#,
    )
}

fn cancel_script(container_id: &str) -> String {
    let id_js = serde_json::to_string(container_id).unwrap_or_default();
    format!(
        "var polls = window.__mhvVegaPolls; \
         if (polls && polls[{id_js}]) {{ clearInterval(polls[{id_js}]); delete polls[{id_js}]; }}"
    )
}

/// Cancel a pending embed and clear whatever vega-embed drew into the container.
pub fn destroy_chart(container_id: &str) {
    call_js(&cancel_script(container_id));
    let el = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id));
    if let Some(el) = el {
        el.set_inner_html("");
    }
}
