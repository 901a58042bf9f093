use super::*;

fn class_decl(input: &str) -> Option<ClassDecl> {
    let mut parser = Parser::new(input);
    let result = parser.parse_class_decl();
    assert_eq!(parser.tokenizer().checkpoint_depth(), 0);
    result
}

fn base(
    access: Option<&str>,
    class_name: ClassName,
) -> BaseDecl {
    BaseDecl {
        access: access.map(str::to_string),
        is_virtual: false,
        class_name,
    }
}

fn qualified_name(input: &str) -> (Option<String>, String) {
    let mut parser = Parser::new(input);
    let name = parser.parse_qualified_name();
    (name, parser.tokenizer().remaining().to_string())
}

#[test]
fn qualified_names() {
    assert_eq!(qualified_name("Happy"), (Some("Happy".into()), "".into()));
    assert_eq!(qualified_name("std::vector<int>"), (Some("std::vector".into()), "<int>".into()));
    assert_eq!(qualified_name("::D x"), (Some("::D".into()), "x".into()));
    assert_eq!(qualified_name("ns::~C()"), (Some("ns::~C".into()), "()".into()));
    assert_eq!(qualified_name("~~A"), (Some("~".into()), "~A".into()));
    assert_eq!(qualified_name("a b"), (Some("a".into()), "b".into()));
    assert_eq!(qualified_name("(x)"), (None, "(x)".into()));
}

#[test]
fn class_name_with_nested_arguments() {
    let mut parser = Parser::new("std::Nest1<std::Nest2<std::double>,a<b>,c>");
    let name = parser.parse_class_name().unwrap();
    assert_eq!(
        name,
        ClassName::templated(
            "std::Nest1",
            vec![
                ClassName::templated("std::Nest2", vec![ClassName::plain("std::double")]),
                ClassName::templated("a", vec![ClassName::plain("b")]),
                ClassName::plain("c"),
            ]
        )
    );
    assert_eq!(name.to_string(), "std::Nest1<std::Nest2<std::double>, a<b>, c>");
}

#[test]
fn class_name_with_empty_arguments() {
    let mut parser = Parser::new("Empty<>");
    let name = parser.parse_class_name().unwrap();
    assert_eq!(name.args, Some(Vec::new()));
    assert_eq!(name.to_string(), "Empty<>");
}

#[test]
fn class_name_unclosed_arguments() {
    let mut parser = Parser::new("Nest1<int");
    assert_eq!(parser.parse_class_name(), None);
}

#[test]
fn class_with_templated_base() {
    assert_eq!(
        class_decl("class Happy : Base1<int> {};"),
        Some(ClassDecl {
            class_name: "Happy".into(),
            attribute: None,
            trailing_attribute: None,
            bases: Some(vec![base(None, ClassName::templated("Base1", vec![ClassName::plain("int")]))]),
        })
    );
}

#[test]
fn class_without_bases() {
    assert_eq!(
        class_decl("class Happy {};"),
        Some(ClassDecl {
            class_name: "Happy".into(),
            attribute: None,
            trailing_attribute: None,
            bases: None,
        })
    );
}

#[test]
fn class_with_access_specifier() {
    let decl = class_decl("class Happy:public Base{").unwrap();
    assert_eq!(decl.bases, Some(vec![base(Some("public"), ClassName::plain("Base"))]));
}

#[test]
fn class_with_nested_template_base() {
    let decl = class_decl("class Happy:Nest1<Nest2<double>>{").unwrap();
    let bases = decl.bases.unwrap();
    let inner = &bases[0].class_name.args.as_ref().unwrap()[0];
    assert_eq!(inner.name, "Nest2");
    assert_eq!(inner.args, Some(vec![ClassName::plain("double")]));
    assert_eq!(inner.args.as_ref().unwrap()[0].args, None);
}

#[test]
fn class_with_export_macro() {
    let decl = class_decl("class EXPORT Happy:std::Nest1<std::Nest2<std::double>>{").unwrap();
    assert_eq!(decl.class_name, "Happy");
    assert_eq!(decl.attribute.as_deref(), Some("EXPORT"));
    assert_eq!(decl.bases.unwrap()[0].class_name.to_string(), "std::Nest1<std::Nest2<std::double>>");
}

#[test]
fn class_with_several_bases() {
    let decl = class_decl("class Happy:std::Nest1<std::Nest2<std::double>,a<b>,c>,d,e{").unwrap();
    let names: Vec<String> = decl.bases.unwrap().iter().map(|base| base.class_name.to_string()).collect();
    assert_eq!(names, ["std::Nest1<std::Nest2<std::double>, a<b>, c>", "d", "e"]);
}

#[test]
fn interface_with_attributes_around_name() {
    assert_eq!(
        class_decl("interface __declspec(('bs')) BS Foo final{"),
        Some(ClassDecl {
            class_name: "Foo".into(),
            attribute: Some("__declspec(('bs')) BS".into()),
            trailing_attribute: Some("final".into()),
            bases: None,
        })
    );
}

#[test]
fn final_class_with_bases() {
    let decl = class_decl("struct Happy final : d, e {").unwrap();
    assert_eq!(decl.class_name, "Happy");
    assert_eq!(decl.attribute, None);
    assert_eq!(decl.trailing_attribute.as_deref(), Some("final"));
    assert_eq!(decl.bases.map(|bases| bases.len()), Some(2));
}

#[test]
fn virtual_bases() {
    let decl = class_decl("class A : public virtual B, virtual protected C, D {").unwrap();
    let bases = decl.bases.unwrap();
    assert_eq!(
        bases,
        vec![
            BaseDecl {
                access: Some("public".into()),
                is_virtual: true,
                class_name: ClassName::plain("B"),
            },
            BaseDecl {
                access: Some("protected".into()),
                is_virtual: true,
                class_name: ClassName::plain("C"),
            },
            base(None, ClassName::plain("D")),
        ]
    );
}

#[test]
fn rejected_class_heads() {
    assert_eq!(class_decl("class Forward;"), None);
    assert_eq!(class_decl("class A : B"), None);
    assert_eq!(class_decl("class {"), None);
    assert_eq!(class_decl("class final {"), None);
    assert_eq!(class_decl("Happy {"), None);
}

#[test]
fn class_head_segment_cap() {
    let head = |count: usize| format!("class {} {{", vec!["A"; count].join(" "));
    assert!(class_decl(&head(MAX_CLASS_HEAD_SEGMENTS)).is_some());
    assert_eq!(class_decl(&head(MAX_CLASS_HEAD_SEGMENTS + 1)), None);
}

#[test]
fn class_decl_consumes_through_brace() {
    let mut parser = Parser::new("class A { int x; };");
    assert!(parser.parse_class_decl().is_some());
    assert_eq!(parser.tokenizer().remaining(), " int x; };");
}
