//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js chart functions are split across `assets/js/*.js` and embedded at
//! compile time. They are evaluated as globals (no ES modules) and exposed
//! via `window.*`. This module provides safe Rust wrappers that serialize
//! data and call those globals.

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static MULTI_LINE_CHART_JS: &str = include_str!("../assets/js/multi-line-chart.js");
static CHOROPLETH_MAP_JS: &str = include_str!("../assets/js/choropleth-map.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Cafe JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderMultiLineChart(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via indirect `eval()` once D3 is ready, and then
/// explicitly promote each function to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, MULTI_LINE_CHART_JS, CHOROPLETH_MAP_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__cafeChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__cafeChartsReady || window.__cafeChartsInit) { return; }
            window.__cafeChartsInit = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__cafeChartScripts);
                    delete window.__cafeChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderMultiLineChart !== 'undefined') window.renderMultiLineChart = renderMultiLineChart;
                    if (typeof renderChoroplethMap !== 'undefined') window.renderChoroplethMap = renderChoroplethMap;
                    if (typeof destroyChart !== 'undefined') window.destroyChart = destroyChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__cafeChartsReady = true;
                    console.log('Cafe charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a multi-line time-series chart (temperature, humidity).
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_multi_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__cafeChartsReady &&
                    typeof window.renderMultiLineChart !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderMultiLineChart('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[Cafe] renderMultiLineChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the national choropleth map from a joined GeoJSON string.
///
/// Same polling discipline as the line charts; the GeoJSON is large, so it
/// is passed through `JSON.parse` inside the chart script.
pub fn render_choropleth_map(container_id: &str, geojson: &str, config_json: &str) {
    let escaped_geo = geojson.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__cafeChartsReady &&
                    typeof window.renderChoroplethMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderChoroplethMap('{container_id}', '{escaped_geo}', '{escaped_config}');
                    }} catch(e) {{ console.error('[Cafe] renderChoroplethMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Remove a rendered chart (used when the selection returns to idle).
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        r#"
        if (typeof window.destroyChart !== 'undefined') {{
            window.destroyChart('{container_id}');
        }}
        "#,
    ));
}
