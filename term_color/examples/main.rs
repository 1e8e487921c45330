// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_term_color::{BOLD, Code, CodeCategory, ColorRender, ColorSupport, Renderer,
                      RendererConfig, Style, TermColorResult, global_renderer, lookup,
                      reset_attributes, set_attributes, strip_sgr_codes, style};
use strum::IntoEnumIterator;

fn main() -> TermColorResult<()> {
    // Print every named code, one table per line.
    {
        for category in CodeCategory::iter() {
            print!("{category:>27}: ");
            for (name, code) in category.table() {
                print!("{} ", code.text(name));
            }
            println!();
        }
    }

    // Combine codes into a style.
    {
        let Some(light_red) = lookup(CodeCategory::ExFg, "lightRed") else {
            return Ok(());
        };
        let it = style!(light_red, Code::BG_BLACK, BOLD);
        it.println(&[&"> Style ", &it, &" applied"])?;
    }

    // Set attributes, print plain text, then reset.
    {
        set_attributes(&[Code::FG_CYAN, Code::OP_UNDERSCORE])?;
        print!("> Set and leave on");
        reset_attributes()?;
        println!();
    }

    // Runtime detection vs an explicit renderer.
    {
        let msg = format!(
            "> Runtime detection of color support ({:?}, console mode {:?})",
            global_renderer().color_support(),
            global_renderer().console_mode().kind()
        );
        Style::from(Code::FG_MAGENTA).println(&[&msg])?;

        let forced = Renderer::new(RendererConfig::new(ColorSupport::Ansi));
        let rendered = forced.render_string("32;1", "> Forced color");
        println!("{rendered} (stripped: {:?})", strip_sgr_codes(&rendered));

        forced.disable();
        println!("{}", forced.render_string("32;1", "> Forced, then disabled"));
    }

    Ok(())
}
