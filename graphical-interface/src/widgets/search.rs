use egui::{Context, TextEdit};

/// The viewer's single control: a floating search box fixed to the top-left
/// corner of the map.
pub struct WidgetSearch;

impl WidgetSearch {
    /// Shows the search box editing `term`.
    ///
    /// Returns `true` when the term changed this frame.
    pub fn show(ctx: &Context, term: &mut String) -> bool {
        let mut changed = false;

        egui::Window::new("search")
            .title_bar(false)
            .resizable(false)
            .movable(false)
            .fixed_pos([20., 20.])
            .show(ctx, |ui| {
                let response = ui.add(
                    TextEdit::singleline(term)
                        .hint_text("Search Province...")
                        .desired_width(220.0),
                );
                changed = response.changed();
            });

        changed
    }
}
