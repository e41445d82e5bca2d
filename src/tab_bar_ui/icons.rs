//! Page icons, drawn with the egui painter so no icon font is needed.

/// Icon shown in front of a page title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageIcon {
    Info,
    Details,
    Other,
    Ending,
}

impl PageIcon {
    /// Pick an icon from the page title.
    ///
    /// Case-insensitive substring match against the kinds in declaration
    /// order; titles matching none of them get [`PageIcon::Other`].
    pub fn for_title(title: &str) -> Self {
        let lower = title.to_lowercase();
        [
            (PageIcon::Info, "info"),
            (PageIcon::Details, "details"),
            (PageIcon::Other, "other"),
            (PageIcon::Ending, "ending"),
        ]
        .into_iter()
        .find(|(_, needle)| lower.contains(needle))
        .map_or(PageIcon::Other, |(icon, _)| icon)
    }

    /// Paint the icon centred in `rect`.
    pub fn paint(self, painter: &egui::Painter, rect: egui::Rect, color: egui::Color32) {
        let stroke = egui::Stroke::new(1.5, color);
        let c = rect.center();
        let r = rect.width().min(rect.height()) / 2.0 - 1.0;

        match self {
            PageIcon::Info => {
                painter.circle_stroke(c, r, stroke);
                painter.line_segment(
                    [egui::pos2(c.x, c.y - r * 0.1), egui::pos2(c.x, c.y + r * 0.5)],
                    stroke,
                );
                painter.circle_filled(egui::pos2(c.x, c.y - r * 0.45), 1.2, color);
            }
            PageIcon::Details => {
                let sheet = egui::Rect::from_center_size(c, egui::vec2(r * 1.5, r * 2.0));
                painter.rect_stroke(sheet, 2.0, stroke, egui::StrokeKind::Middle);
                for i in 0..3 {
                    let y = sheet.top() + sheet.height() * (0.3 + 0.2 * i as f32);
                    painter.line_segment(
                        [
                            egui::pos2(sheet.left() + r * 0.35, y),
                            egui::pos2(sheet.right() - r * 0.35, y),
                        ],
                        stroke,
                    );
                }
            }
            PageIcon::Other => {
                let sheet = egui::Rect::from_center_size(c, egui::vec2(r * 1.5, r * 2.0));
                let fold = r * 0.5;
                let points = vec![
                    sheet.left_top(),
                    egui::pos2(sheet.right() - fold, sheet.top()),
                    egui::pos2(sheet.right(), sheet.top() + fold),
                    sheet.right_bottom(),
                    sheet.left_bottom(),
                ];
                painter.add(egui::Shape::closed_line(points, stroke));
            }
            PageIcon::Ending => {
                painter.circle_stroke(c, r, stroke);
                painter.add(egui::Shape::line(
                    vec![
                        egui::pos2(c.x - r * 0.45, c.y),
                        egui::pos2(c.x - r * 0.1, c.y + r * 0.35),
                        egui::pos2(c.x + r * 0.5, c.y - r * 0.35),
                    ],
                    stroke,
                ));
            }
        }
    }
}
