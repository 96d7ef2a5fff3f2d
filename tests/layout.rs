mod setup;
use setup::*;
use texbox::{Settings, render, render_to_json};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

const CORPUS: &[&str] = &[
    "x",
    "x^2",
    "x_i^2",
    r"\frac{a}{b}",
    r"\dfrac{1}{1+\frac{1}{x}}",
    r"\binom{n}{k}",
    r"\sqrt{x}",
    r"\sqrt[3]{x^2+y^2}",
    r"\left( \frac{a}{b} \right]",
    r"\big( \Big[ \bigg\{ \Bigg|",
    r"\sum_{i=1}^{n} i^2",
    r"\int_0^1 f(x)\,dx",
    r"\lim_{x \to 0} \frac{\sin x}{x}",
    r"\hat{x} + \vec{v}",
    r"\overline{ab} \underline{cd}",
    r"\text{if } x > 0",
    r"\color{red} x + \textcolor{blue}{y}",
    r"\mathbf{A} \mathbb{R}",
    r"\phantom{x} y",
    r"\rule{1em}{0.5em}",
    r"a \quad b \qquad c",
    r"\mathrel{x} \mathbin{y}",
    r"\tiny x \Huge y",
    r"\displaystyle \sum_{k} \scriptstyle x",
    r"\begin{pmatrix} a & b \\ c & d \end{pmatrix}",
    r"\begin{array}{|l|c|} \hline 1 & 2 \\ \hline \end{array}",
    r"f(x) = \begin{cases} 0 & x < 0 \\ 1 & x \ge 0 \end{cases}",
    r"\begin{aligned} a &= b \\ c &= d \end{aligned}",
    r"a \not= b \not\in C",
    r"\overset{!}{=} \underset{n}{\sim} \stackrel{?}{=}",
    r"\overbrace{a+b}^{2} \underbrace{c+d}_{k}",
    r"A \xrightarrow[g]{f} B \xLeftarrow{} C \xmapsto{h} D \xlongequal{}",
    r"\boxed{x^2} \fbox{text}",
    r"\smash[b]{y} \llap{/} \rlap{x} \mathclap{\sum}",
    r"a \bmod b \pmod{n} \mod{m}",
];

#[test]
fn a_rendered_tree() {
    it("should have non-negative, finite dimensions everywhere", || {
        for settings in [Settings::default(), display_settings()] {
            for expr in CORPUS {
                let tree = expect!(expr).to_build(&settings)?;
                assert!(tree.width >= 0.0 && tree.height >= 0.0 && tree.depth >= 0.0, "{expr}");
                assert_dimensions_valid(&tree.root);
            }
        }
        Ok(())
    });

    it("should be the same every time", || {
        let settings = Settings::default();
        for expr in CORPUS {
            let first = render(default_ctx(), expr, &settings)?;
            let second = render(default_ctx(), expr, &settings)?;
            assert_eq!(first, second, "{expr}");
            assert_eq!(
                render_to_json(default_ctx(), expr, &settings)?,
                render_to_json(default_ctx(), expr, &settings)?,
            );
        }
        Ok(())
    });

    it("should report the display mode it was rendered in", || {
        assert!(expect!("x").to_build(&display_settings())?.display_mode);
        assert!(!expect!("x").to_build(&Settings::default())?.display_mode);
        Ok(())
    });
}

#[test]
fn a_style_switch() {
    it("should shrink symbols in script style", || {
        let text = render_default("x")?;
        let script = render_default(r"\scriptstyle x")?;
        let scriptscript = render_default(r"\scriptscriptstyle x")?;
        assert!(script.width < text.width);
        assert!(scriptscript.width < script.width);
        Ok(())
    });

    it("should make display operators larger", || {
        let text = render_default(r"\sum")?;
        let display = expect!(r"\sum").to_build(&display_settings())?;
        assert!(display.height + display.depth > text.height + text.depth);
        Ok(())
    });

    it("should grow symbols with the size commands", || {
        let normal = render_default("x")?;
        let huge = render_default(r"\Huge x")?;
        let tiny = render_default(r"\tiny x")?;
        assert!(huge.width > normal.width);
        assert!(tiny.width < normal.width);
        Ok(())
    });
}

#[test]
fn a_fraction() {
    it("should stack numerator over rule over denominator", || {
        let tree = render_default(r"\frac{a}{b}")?;
        let placed = glyphs(&tree);
        let bars = rules(&tree);
        assert_eq!(bars.len(), 1);
        let (a, b, bar_y) = (glyph(&placed, "a"), glyph(&placed, "b"), bars[0].1);
        assert!(a.y < bar_y);
        assert!(bar_y < b.y);
        Ok(())
    });

    it("should center the narrower part over the wider one", || {
        let tree = render_default(r"\frac{a}{xyz}")?;
        let placed = glyphs(&tree);
        let (a, x, z) = (glyph(&placed, "a"), glyph(&placed, "x"), glyph(&placed, "z"));
        let numer_center = a.x + a.width / 2.0;
        let denom_center = (x.x + z.x + z.width) / 2.0;
        assert!(close(numer_center, denom_center));

        let (bar_x, _, bar_width) = rules(&tree)[0];
        assert!(close(bar_x, x.x));
        assert!(close(bar_width, z.x + z.width - x.x));
        Ok(())
    });

    it("should set the denominator in a cramped style", || {
        let tree = render_default(r"\frac{x^2}{x^2}")?;
        let placed = glyphs(&tree);
        let bases: Vec<_> = placed.iter().filter(|g| g.text == "x").collect();
        let scripts: Vec<_> = placed.iter().filter(|g| g.text == "2").collect();
        let numer_raise = bases[0].y - scripts[0].y;
        let denom_raise = bases[1].y - scripts[1].y;
        assert!(numer_raise > denom_raise);
        Ok(())
    });

    it("should spread further apart in display style", || {
        let text = render_default(r"\frac{a}{b}")?;
        let display = expect!(r"\frac{a}{b}").to_build(&display_settings())?;
        assert!(display.height > text.height);
        assert!(display.depth > text.depth);
        Ok(())
    });

    it("should lay out infix fractions like prefix ones", || {
        expect!(r"{a \over b}").to_build_like(r"{\frac{a}{b}}", &Settings::default())?;
        Ok(())
    });
}

#[test]
fn a_spacing_builder() {
    it("should put medium space around binary operators", || {
        let tree = render_default("a+b")?;
        let ink: f64 = glyphs(&tree).iter().map(|g| g.width).sum();
        assert!(tree.width > ink + 0.3);
        Ok(())
    });

    it("should treat a leading binary operator as ordinary", || {
        let tree = render_default("+b")?;
        let ink: f64 = glyphs(&tree).iter().map(|g| g.width).sum();
        assert!(close(tree.width, ink));
        Ok(())
    });

    it("should drop binary spacing in script style", || {
        let tree = render_default(r"\scriptstyle a+b")?;
        let ink: f64 = glyphs(&tree).iter().map(|g| g.width).sum();
        assert!(close(tree.width, ink));
        Ok(())
    });

    it("should honor explicit spacing", || {
        let plain = render_default("ab")?;
        let quad = render_default(r"a\quad b")?;
        assert!(close(quad.width - plain.width, 1.0));
        Ok(())
    });
}

#[test]
fn a_script_builder() {
    it("should raise superscripts and lower subscripts", || {
        let tree = render_default("x_i^n")?;
        let placed = glyphs(&tree);
        let (x, i, n) = (glyph(&placed, "x"), glyph(&placed, "i"), glyph(&placed, "n"));
        assert!(n.y < x.y);
        assert!(i.y > x.y);
        assert!(i.x > x.x && n.x > x.x);
        Ok(())
    });

    it("should put limits above and below in display style", || {
        let tree = expect!(r"\sum_{i}^{n}").to_build(&display_settings())?;
        let placed = glyphs(&tree);
        assert!(glyph(&placed, "n").y < -0.5);
        assert!(glyph(&placed, "i").y > 0.5);
        Ok(())
    });
}

#[test]
fn a_decoration_builder() {
    it("should draw the radical rule above the radicand", || {
        let tree = render_default(r"\sqrt{x}")?;
        let x = glyph(&glyphs(&tree), "x").y;
        let bars = rules(&tree);
        assert_eq!(bars.len(), 1);
        assert!(bars[0].1 < x);
        Ok(())
    });

    it("should draw overlines above and underlines below", || {
        let over = render_default(r"\overline{x}")?;
        assert!(rules(&over)[0].1 < glyph(&glyphs(&over), "x").y);
        let under = render_default(r"\underline{x}")?;
        assert!(rules(&under)[0].1 > glyph(&glyphs(&under), "x").y);
        Ok(())
    });

    it("should keep the size of a phantom but draw nothing", || {
        let phantom = render_default(r"\phantom{x}")?;
        let visible = render_default("x")?;
        assert!(close(phantom.width, visible.width));
        assert!(glyphs(&phantom).is_empty());
        Ok(())
    });

    it("should size rules in ems", || {
        let tree = render_default(r"\rule{1em}{2em}")?;
        assert!(close(tree.width, 1.0));
        assert!(close(tree.height, 2.0));
        Ok(())
    });

    it("should color the glyphs under a color command", || {
        let tree = render_default(r"\textcolor{red}{x} y")?;
        let placed = glyphs(&tree);
        assert_eq!(glyph(&placed, "x").color.as_deref(), Some("red"));
        assert_eq!(glyph(&placed, "y").color, None);
        Ok(())
    });

    it("should grow delimiters around tall content", || {
        let small = render_default(r"\left( x \right)")?;
        let tall = render_default(r"\left( \dfrac{a}{b} \right)")?;
        assert!(tall.height + tall.depth > small.height + small.depth);
        Ok(())
    });
}

#[test]
fn an_overlay_builder() {
    it("should strike a relation through without widening it", || {
        let struck = render_default(r"\not=")?;
        let plain = render_default("=")?;
        assert!(close(struck.width, plain.width));
        let placed = glyphs(&struck);
        let (slash, equals) = (glyph(&placed, "/"), glyph(&placed, "="));
        assert!(slash.x > equals.x && slash.x < equals.x + equals.width);
        Ok(())
    });

    it("should let laps hang over their neighbours", || {
        let lapped = render_default(r"\llap{ab}c")?;
        let plain = render_default("c")?;
        assert!(close(lapped.width, plain.width));
        assert!(glyph(&glyphs(&lapped), "a").x < 0.0);
        Ok(())
    });

    it("should drop the height and depth of smashed material", || {
        let tree = render_default(r"\smash{\frac{a}{b}}")?;
        assert!(close(tree.height, 0.0));
        assert!(close(tree.depth, 0.0));
        assert_eq!(glyphs(&tree).len(), 2);
        Ok(())
    });

    it("should pick the body matching the style", || {
        let text = render_default(r"\mathchoice{a}{b}{c}{d}")?;
        let texts: Vec<_> = glyphs(&text).into_iter().map(|g| g.text).collect();
        assert_eq!(texts, ["b"]);
        let display = expect!(r"\mathchoice{a}{b}{c}{d}").to_build(&display_settings())?;
        assert_eq!(glyphs(&display)[0].text, "a");
        Ok(())
    });
}

#[test]
fn a_stacking_builder() {
    it("should set overset material above the base", || {
        let placed = glyphs(&render_default(r"\overset{!}{=}")?);
        assert!(glyph(&placed, "!").y < glyph(&placed, "=").y);
        let placed = glyphs(&render_default(r"\underset{n}{=}")?);
        assert!(glyph(&placed, "n").y > glyph(&placed, "=").y);
        Ok(())
    });

    it("should put a brace and its note above the base", || {
        let tree = render_default(r"\overbrace{x+y}^{n}")?;
        let placed = glyphs(&tree);
        let (x, n) = (glyph(&placed, "x"), glyph(&placed, "n"));
        assert!(n.y < x.y);
        let brace = rules(&tree);
        assert_eq!(brace.len(), 5);
        assert!(brace.iter().all(|&(_, y, _)| y < x.y && y > n.y));
        Ok(())
    });

    it("should put an underbrace and its note below the base", || {
        let tree = render_default(r"\underbrace{x+y}_{n}")?;
        let placed = glyphs(&tree);
        assert!(glyph(&placed, "n").y > glyph(&placed, "x").y);
        assert_eq!(rules(&tree).len(), 5);
        Ok(())
    });

    it("should label an extensible arrow above and below", || {
        let tree = render_default(r"\xrightarrow[b]{a}")?;
        let placed = glyphs(&tree);
        let (a, b, head) = (glyph(&placed, "a"), glyph(&placed, "b"), glyph(&placed, "\u{2192}"));
        assert!(a.y < head.y && head.y < b.y);
        assert!(tree.width >= 1.469 - 1e-9);
        Ok(())
    });

    it("should space an extensible arrow as a relation", || {
        let tree = render_default(r"x \xrightarrow{f} y")?;
        let arrow = render_default(r"\xrightarrow{f}")?;
        let ends: f64 = glyphs(&render_default("xy")?).iter().map(|g| g.width).sum();
        assert!(tree.width > arrow.width + ends + 0.5);
        Ok(())
    });

    it("should frame boxed material on four sides", || {
        let tree = render_default(r"\boxed{x}")?;
        let frame = rules(&tree);
        assert_eq!(frame.len(), 4);
        let gs = glyphs(&tree);
        let x = glyph(&gs, "x");
        assert!(frame.iter().any(|&(rx, _, _)| rx < x.x));
        assert!(tree.width > x.width + 0.6);
        Ok(())
    });
}
