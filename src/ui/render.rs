use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{board_regions, layout_regions};
use crate::ui::theme::{GLOBAL_BORDER, MUTED_TEXT};
use crate::ui::views::{detail_panel, DetailPanel, UserListView, PLACEHOLDER};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, TableState};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let board = app.board();

    let header_widget = Header::new(
        app.source_url(),
        app.fetch_status(),
        app.rows().len(),
        board.posts.len(),
    );
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);

    let (table_area, detail_area) = board_regions(body);
    let list = UserListView::new(board);
    let mut table_state = TableState::default();
    if !list.rows().is_empty() {
        table_state.select(Some(app.cursor()));
    }
    frame.render_stateful_widget(list.widget(), table_area, &mut table_state);

    match detail_panel(board) {
        DetailPanel::Detail(view) => {
            frame.render_widget(view.widget(app.detail_scroll()), detail_area);
        }
        DetailPanel::Placeholder => {
            let placeholder = Paragraph::new(PLACEHOLDER)
                .style(Style::default().fg(MUTED_TEXT))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(GLOBAL_BORDER)),
                );
            frame.render_widget(placeholder, detail_area);
        }
    }

    let footer_widget = Footer::new(app.fetch_status());
    frame.render_widget(footer_widget.widget(footer), footer);
}
