mod setup;
use setup::*;
use texbox::{ParseErrorKind, Settings, parser::NodeType, parser::ParseNode};

#[test]
fn a_parser() {
    it("should not fail on an empty string", || {
        expect!("").to_parse(&strict_settings())?;
        Ok(())
    });

    it("should ignore whitespace", || {
        let spaced = get_parsed("    x    y    ", &Settings::default())?;
        let tight = get_parsed("xy", &Settings::default())?;
        assert_eq!(spaced.len(), tight.len());
        Ok(())
    });

    it("should always produce an ord group at the root", || {
        let root = expect!("x+y").to_parse(&Settings::default())?;
        assert_let!(ParseNode::OrdGroup(group) = root);
        assert_eq!(group.body.len(), 3);
        Ok(())
    });
}

#[test]
fn a_group_parser() {
    it("should parse a braced group into a group holding the symbol", || {
        let body = get_parsed("{x}", &Settings::default())?;
        assert_eq!(body.len(), 1);
        assert_let!(ParseNode::OrdGroup(group) = &body[0]);
        assert_eq!(group.body.len(), 1);
        assert_let!(ParseNode::MathOrd(symbol) = &group.body[0]);
        assert_eq!(symbol.text, "x");
        Ok(())
    });

    it("should reject an unclosed group", || {
        let err = expect!("{x").not_to_parse(&Settings::default());
        assert!(matches!(error_kind(&err), ParseErrorKind::UnbalancedGroup { .. }));
        Ok(())
    });

    it("should reject an unopened group", || {
        let err = expect!("x}").not_to_parse(&Settings::default());
        assert!(matches!(error_kind(&err), ParseErrorKind::UnbalancedGroup { .. }));
        Ok(())
    });

    it("should treat unbalanced groups as fatal even when lenient", || {
        let err = expect!("{x").not_to_parse(&lenient_settings());
        assert!(matches!(error_kind(&err), ParseErrorKind::UnbalancedGroup { .. }));
        Ok(())
    });
}

#[test]
fn a_superscript_parser() {
    it("should produce supsubs for superscripts and subscripts", || {
        let body = get_parsed("x^2_3", &Settings::default())?;
        assert_let!(ParseNode::SupSub(supsub) = &body[0]);
        assert!(supsub.base.is_some());
        assert!(supsub.sup.is_some());
        assert!(supsub.sub.is_some());
        Ok(())
    });

    it("should reject a double superscript", || {
        let err = expect!("x^2^3").not_to_parse(&Settings::default());
        assert_eq!(*error_kind(&err), ParseErrorKind::DoubleSuperscript);
        Ok(())
    });

    it("should reject a double subscript", || {
        let err = expect!("x_2_3").not_to_parse(&Settings::default());
        assert_eq!(*error_kind(&err), ParseErrorKind::DoubleSubscript);
        Ok(())
    });

    it("should accept nested superscripts", || {
        let body = get_parsed("x^{2^3}", &Settings::default())?;
        assert_let!(ParseNode::SupSub(outer) = &body[0]);
        assert_let!(Some(ParseNode::OrdGroup(sup)) = outer.sup.as_deref());
        assert_eq!(sup.body[0].node_type(), NodeType::SupSub);
        Ok(())
    });

    it("should turn primes into superscripts", || {
        let body = get_parsed("f'", &Settings::default())?;
        assert_let!(ParseNode::SupSub(supsub) = &body[0]);
        assert!(supsub.sup.is_some());
        assert!(supsub.sub.is_none());
        Ok(())
    });

    it("should reject a superscript after primes and a superscript", || {
        let err = expect!("f'^2^3").not_to_parse(&Settings::default());
        assert_eq!(*error_kind(&err), ParseErrorKind::DoubleSuperscript);
        Ok(())
    });
}

#[test]
fn an_infix_parser() {
    it("should turn the enclosing group into a fraction", || {
        let body = get_parsed(r"{a \over b}", &Settings::default())?;
        assert_let!(ParseNode::OrdGroup(group) = &body[0]);
        assert_let!(ParseNode::Genfrac(frac) = &group.body[0]);
        assert!(frac.has_bar_line);
        Ok(())
    });

    it("should give choose delimiters and no bar", || {
        let body = get_parsed(r"n \choose k", &Settings::default())?;
        assert_let!(ParseNode::Genfrac(frac) = &body[0]);
        assert!(!frac.has_bar_line);
        assert_eq!(frac.left_delim.as_deref(), Some("("));
        assert_eq!(frac.right_delim.as_deref(), Some(")"));
        Ok(())
    });

    it("should reject two infix operators in one group", || {
        let err = expect!(r"a \over b \atop c").not_to_parse(&Settings::default());
        assert_eq!(*error_kind(&err), ParseErrorKind::MultipleInfixOperators);
        Ok(())
    });
}

#[test]
fn a_text_parser() {
    it("should keep spaces in text mode", || {
        let body = get_parsed(r"\text{a b}", &Settings::default())?;
        assert_let!(ParseNode::Text(text) = &body[0]);
        assert_eq!(text.body.len(), 3);
        assert_eq!(text.body[1].node_type(), NodeType::Spacing);
        Ok(())
    });

    it("should not treat carets as scripts in text mode", || {
        let body = get_parsed(r"\text{a^b}", &Settings::default())?;
        assert_let!(ParseNode::Text(text) = &body[0]);
        assert!(text.body.iter().all(|node| node.node_type() != NodeType::SupSub));
        Ok(())
    });
}

#[test]
fn an_unknown_command_parser() {
    it("should produce an error node when strict is ignore", || {
        let body = get_parsed(r"a \foo b", &ignore_settings())?;
        assert_eq!(body.len(), 3);
        assert_let!(ParseNode::Error(marker) = &body[1]);
        assert_eq!(marker.text, r"\foo");
        assert!(marker.loc.is_some());
        Ok(())
    });

    it("should produce an error node when strict is warn", || {
        let body = get_parsed(r"\foo", &Settings::default())?;
        assert_eq!(body[0].node_type(), NodeType::Error);
        Ok(())
    });

    it("should fail when strict is error", || {
        let err = expect!(r"a \foo b").not_to_parse(&strict_settings());
        assert_eq!(
            *error_kind(&err),
            ParseErrorKind::UndefinedControlSequence {
                name: r"\foo".to_owned()
            }
        );
        assert_eq!(err.position, Some(2));
        Ok(())
    });

    it("should treat a trailing backslash as an unknown command", || {
        let body = get_parsed("x\\", &ignore_settings())?;
        assert_eq!(body.last().map(ParseNode::node_type), Some(NodeType::Error));
        Ok(())
    });
}

#[test]
fn a_function_parser() {
    it("should reject a function without its arguments", || {
        expect!(r"\frac{a}").not_to_parse(&Settings::default());
        expect!(r"\sqrt").not_to_parse(&Settings::default());
        Ok(())
    });

    it("should read optional arguments", || {
        let body = get_parsed(r"\sqrt[3]{x}", &Settings::default())?;
        assert_let!(ParseNode::Sqrt(sqrt) = &body[0]);
        assert!(sqrt.index.is_some());
        Ok(())
    });

    it("should reject math-only functions in text mode", || {
        let err = expect!(r"\text{\frac{a}{b}}").not_to_parse(&Settings::default());
        assert!(matches!(
            error_kind(&err),
            ParseErrorKind::FunctionDisallowedInMode { .. }
        ));
        Ok(())
    });
}
