//! Batch driver tests: discovery, output layout, determinism, and
//! partial-output behavior on script failures.

use std::fs;
use std::path::Path;

use vue_compiler::CompilerConfig;
use vue_compiler_cli::{perform_convert, ConvertOptions};

const COUNTER: &str = "
<template>
  <button @click=\"increment\">{{count}}</button>
</template>

<script>
export default {
  data() { return { count: 0 }; },
  methods: { increment() { this.count = this.count + 1; } },
};
</script>

<style>
button { color: blue; }
</style>
";

fn write_component(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn options(input: &Path, output: &Path) -> ConvertOptions {
    ConvertOptions {
        input_root: input.to_path_buf(),
        output_root: output.to_path_buf(),
        config: CompilerConfig::default(),
        sequential: true,
    }
}

#[test]
fn converts_a_tree_into_hyphenated_output_directories() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("src");
    let output = dir.path().join("out");
    write_component(&input, "AdminPanel/UserBadge.vue", COUNTER);

    let result = perform_convert(&options(&input, &output)).unwrap();
    assert_eq!(result.outcomes.len(), 1);
    assert_eq!(result.failure_count(), 0);

    let component = output.join("admin-panel/user-badge/user-badge.jsx");
    let style = output.join("admin-panel/user-badge/styles.css");
    assert!(component.is_file());
    assert!(style.is_file());

    let generated = fs::read_to_string(&component).unwrap();
    assert!(generated.contains("export default function UserBadge(props: UserBadgeProps) {"));
    assert!(fs::read_to_string(&style).unwrap().contains("color: blue"));
}

#[test]
fn rerunning_produces_byte_identical_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("src");
    let output = dir.path().join("out");
    write_component(&input, "Counter.vue", COUNTER);

    perform_convert(&options(&input, &output)).unwrap();
    let component = output.join("counter/counter.jsx");
    let first = fs::read_to_string(&component).unwrap();

    perform_convert(&options(&input, &output)).unwrap();
    let second = fs::read_to_string(&component).unwrap();

    assert_eq!(first, second);
}

#[test]
fn script_failure_still_writes_the_stylesheet() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("src");
    let output = dir.path().join("out");
    write_component(
        &input,
        "Broken.vue",
        "<template><div /></template>\n<script>export default brokenFactory;</script>\n<style>.a {}</style>",
    );

    let result = perform_convert(&options(&input, &output)).unwrap();
    assert_eq!(result.failure_count(), 1);

    assert!(output.join("broken/styles.css").is_file());
    assert!(!output.join("broken/broken.jsx").exists());
}

#[test]
fn a_failing_file_does_not_abort_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("src");
    let output = dir.path().join("out");
    write_component(&input, "Good.vue", COUNTER);
    write_component(
        &input,
        "Bad.vue",
        "<template><div /></template>\n<script>export default nope;</script>",
    );

    let result = perform_convert(&options(&input, &output)).unwrap();
    assert_eq!(result.outcomes.len(), 2);
    assert_eq!(result.failure_count(), 1);
    assert!(output.join("good/good.jsx").is_file());
}
