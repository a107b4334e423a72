//! State Hook Emission
//!
//! One `useState` read/write pair per declared state field, initial values
//! rendered from the extracted model.

use indexmap::IndexMap;

use crate::script_parser::ast::JsValue;
use crate::util;

pub fn state_hooks(state: &IndexMap<String, JsValue>) -> String {
    if state.is_empty() {
        return String::new();
    }

    let mut parts = Vec::with_capacity(state.len());
    for (name, value) in state {
        let target = util::to_state_name(name);
        parts.push(format!(
            "  const [ {}, {} ] = useState({});",
            target,
            util::to_state_setter_name(name),
            value.to_js_source()
        ));
    }

    parts.join("\n")
}
