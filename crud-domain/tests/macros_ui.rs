// 宏展开的编译期检查：每个 ui 用例需能独立编译
#[test]
fn macro_expansions_compile() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/*.rs");
}
