mod text_view;

pub use text_view::render as render_text;
pub use text_view::render_json;
