//! Component Assembler
//!
//! Pure string concatenation of the generated sections into the final
//! component source: imports, props interface, component declaration,
//! methods, computed, state hooks, render. Empty sections are omitted.

/// Assemble the final component source text.
pub fn assemble(
    component_name: &str,
    props_interface: &str,
    methods: &str,
    computed: &str,
    state: &str,
    render: &str,
    review_notes: &[String],
) -> String {
    let mut out = String::new();

    out.push_str("import React, { useState } from 'react';\n");
    out.push_str("import classNames from 'classnames';\n");
    out.push_str("import './styles.css';\n");

    if !review_notes.is_empty() {
        out.push('\n');
        for note in review_notes {
            out.push_str(&format!("// TODO: review: {}\n", note));
        }
    }

    out.push('\n');
    out.push_str(props_interface);
    out.push_str("\n\n");

    out.push_str(&format!(
        "export default function {}(props: {}Props) {{\n",
        component_name, component_name
    ));

    for section in [methods, computed, state] {
        if !section.trim().is_empty() {
            out.push_str(section);
            out.push_str("\n\n");
        }
    }

    out.push_str(render);
    out.push_str("\n}\n");

    out
}
