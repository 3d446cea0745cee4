//! Bottom line: pagination controls, range status, page-size indicator.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::view::GridView;

use super::super::style::Styles;

pub fn render_footer(frame: &mut Frame, area: Rect, view: &GridView) {
    let chunks = Layout::horizontal([Constraint::Min(20), Constraint::Min(20)]).split(area);

    frame.render_widget(Paragraph::new(pager_line(view)), chunks[0]);

    let status = Line::from(vec![
        Span::styled(view.status.clone(), Styles::default()),
        Span::styled(
            format!(" · {} {} ", view.page_size.current, view.page_size.label),
            Styles::dim(),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Right),
        chunks[1],
    );
}

/// `« First ‹ Previous 1 [2] 3 Next › Last »` with inactive controls dimmed.
fn pager_line(view: &GridView) -> Line<'static> {
    let pager = &view.pager;
    let mut spans: Vec<Span> = Vec::new();

    let leading = if pager.show_first_prev {
        Styles::default()
    } else {
        Styles::dim()
    };
    spans.push(Span::styled(format!(" « {}", pager.first_label), leading));
    spans.push(Span::styled(format!(" ‹ {} ", pager.previous_label), leading));

    for &page in &pager.pages {
        let style = if page == pager.current {
            Styles::current_page()
        } else {
            Styles::default()
        };
        spans.push(Span::styled(format!(" {page} "), style));
    }

    let trailing = if pager.show_next_last {
        Styles::default()
    } else {
        Styles::dim()
    };
    spans.push(Span::styled(format!(" {} ›", pager.next_label), trailing));
    spans.push(Span::styled(format!(" {} »", pager.last_label), trailing));

    Line::from(spans)
}
