//! Event Name Translation
//!
//! Maps template event names to React's synthetic event prop names.
//! Modifier suffixes (`@click.stop`) are stripped by the caller.

use crate::util;

/// Translate a base event name (`click`, `keyup`, …) to its React
/// counterpart. Unknown events fall back to `on` + capitalized camelCase.
pub fn react_event_name(event: &str) -> String {
    let known = match event {
        "click" => "onClick",
        "dblclick" => "onDoubleClick",
        "mousedown" => "onMouseDown",
        "mouseup" => "onMouseUp",
        "mouseover" => "onMouseOver",
        "mouseout" => "onMouseOut",
        "mousemove" => "onMouseMove",
        "mouseenter" => "onMouseEnter",
        "mouseleave" => "onMouseLeave",
        "contextmenu" => "onContextMenu",
        "keydown" => "onKeyDown",
        "keyup" => "onKeyUp",
        "keypress" => "onKeyPress",
        "input" => "onInput",
        "change" => "onChange",
        "submit" => "onSubmit",
        "reset" => "onReset",
        "focus" => "onFocus",
        "blur" => "onBlur",
        "scroll" => "onScroll",
        "wheel" => "onWheel",
        "drag" => "onDrag",
        "dragstart" => "onDragStart",
        "dragend" => "onDragEnd",
        "dragover" => "onDragOver",
        "dragenter" => "onDragEnter",
        "dragleave" => "onDragLeave",
        "drop" => "onDrop",
        "touchstart" => "onTouchStart",
        "touchmove" => "onTouchMove",
        "touchend" => "onTouchEnd",
        "touchcancel" => "onTouchCancel",
        "copy" => "onCopy",
        "cut" => "onCut",
        "paste" => "onPaste",
        "load" => "onLoad",
        "error" => "onError",
        _ => "",
    };

    if !known.is_empty() {
        return known.to_string();
    }

    format!(
        "on{}",
        util::capitalize(&util::dash_case_to_camel_case(event))
    )
}
