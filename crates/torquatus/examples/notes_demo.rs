//! Headless walk-through of the note editor and PDF viewer.
//!
//! Uses a stand-in PDF backend that renders blank pages, so it runs without
//! any native PDF library.
//!
//! Run with: cargo run -p torquatus --example notes_demo

use std::path::Path;

use image::{Rgba, RgbaImage};
use torquatus::prelude::*;

struct BlankDocument {
    pages: usize,
}

impl PdfSource for BlankDocument {
    fn page_count(&self) -> usize {
        self.pages
    }

    fn render_page(&mut self, _index: usize, scale: f32) -> PdfResult<RgbaImage> {
        let width = (595.0 * scale) as u32;
        let height = (842.0 * scale) as u32;
        Ok(RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255])))
    }
}

fn open_blank(_path: &Path) -> PdfResult<Box<dyn PdfSource>> {
    Ok(Box::new(BlankDocument { pages: 4 }))
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("Torquatus notes demo");
    println!("====================");

    let mut workbench = Workbench::new(open_blank);
    workbench.notes().editor().style_changed.connect(|state: &ToolbarState| {
        println!(
            "  toolbar: bold={} italic={} underline={} align={}",
            state.bold, state.italic, state.underline, state.alignment
        );
    });
    workbench.notified.connect(|n: &Notification| {
        println!("  [{}] {}", n.title, n.message);
    });
    workbench.process_deferred();

    workbench.execute(Command::TypeText("Hello World\nSecond paragraph".into()));
    workbench.execute(Command::Select(SelectionRange::new(0, 5)));
    workbench.execute(Command::ToggleFormat(ToggleFormat::Bold));
    workbench.execute(Command::Highlight("Amarelo".into()));
    workbench.execute(Command::Align(Alignment::Center));
    workbench.execute(Command::Highlight("Roxo".into()));

    for (text, style) in workbench.notes().editor().document().to_styled_runs() {
        println!("  {:?} -> {}", text, style);
    }

    workbench.execute(Command::OpenPdf("paper.pdf".into()));
    workbench.execute(Command::NextPage);
    workbench.execute(Command::SetZoom(Zoom::Percent50));
    println!("  viewer: {} at {}", workbench.viewer().page_label(), workbench.viewer().zoom());

    workbench.execute(Command::ToggleTheme);
    println!("  theme: {:?}", workbench.theme());

    workbench.execute(Command::ShowAbout);
}
