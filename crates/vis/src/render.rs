//! HTML output for built components.

mod crop;

pub use crop::Bitmap;
pub use crop::Bounds;

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::component::Component;
use crate::error::Result;

#[derive(Serialize)]
struct Context {
    title: String,
    spec: String,
}

/// Writes a component as a self-contained HTML page.
///
/// The page loads the rendering engine from a CDN as an ES module,
/// embeds the component spec as JSON and mounts the parsed spec into
/// the document body.
pub fn write_html(path: &Path, component: &Component, title: &str) -> Result<()> {
    let mut template = TinyTemplate::new();
    template.add_template("index", include_str!("./render/index.html.tt"))?;

    let context = Context {
        title: title.to_owned(),
        spec: serde_json::to_string_pretty(&component.spec())?,
    };
    let text = template.render("index", &context)?;

    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    use serde_json::json;

    use crate::data::Data;
    use crate::data::Frame;
    use crate::mark::dot;
    use crate::plot::plot;

    #[test]
    fn pages_embed_the_spec_and_title() {
        let frame = Frame::from_columns([("x", vec![json!(1)])]).unwrap();
        let data = Data::new("points", frame);
        let chart = plot().mark(dot(&data).x("x")).build();

        let path = std::env::temp_dir().join("evalplot-render-test.html");
        write_html(&path, &chart, "Points").unwrap();

        let page = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(page.contains("<title>Points</title>"));
        assert!(page.contains(r#""hconcat""#));
        assert!(page.contains("@uwdata/mosaic-spec@0.16.2"));
        assert!(page.contains("parseSpec"));
    }
}
