use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui_select::Catalog;
use ratatui_select::SelectAction;
use ratatui_select::SelectView;
use ratatui_select::Selection;
use ratatui_select::crossterm_input::input_event_from_crossterm;
use ratatui_select::help::HelpBar;
use ratatui_select::select::SelectBindings;
use ratatui_select::select::SelectViewOptions;
use ratatui_select::theme::Theme;
use std::io;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

struct Field {
    view: SelectView,
    selection: Selection,
}

fn main() -> io::Result<()> {
    init_tracing()?;

    let catalog = Catalog::from_pairs([
        ("first", 1),
        ("second", 2),
        ("third", 3),
        ("fourth", 4),
        ("fifth", 5),
    ])
    .map_err(io::Error::other)?;

    let mut fields = [
        Field {
            view: SelectView::new(),
            selection: Selection::multiple(catalog.get(0).cloned().into_iter().collect()),
        },
        Field {
            view: SelectView::with_options(SelectViewOptions {
                placeholder: "pick one".to_string(),
                ..Default::default()
            }),
            selection: Selection::single(catalog.get(0).cloned()),
        },
    ];
    fields[0].view.set_focused(true);

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal, &catalog, &mut fields);

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    res
}

fn init_tracing() -> io::Result<()> {
    let Ok(path) = std::env::var("RATATUI_SELECT_LOG") else {
        return Ok(());
    };
    let file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    catalog: &Catalog,
    fields: &mut [Field; 2],
) -> io::Result<()> {
    let theme = Theme::default();
    let mut help_bindings = SelectBindings::default().help_bindings();
    help_bindings.push(ratatui_select::keymap::Binding::new("tab", "next field", Vec::new()));
    help_bindings.push(ratatui_select::keymap::Binding::new("q", "quit", Vec::new()));
    let help = HelpBar::with_options(
        help_bindings,
        ratatui_select::help::HelpBarOptions {
            style: theme.text_muted,
            key_style: theme.accent,
            ..Default::default()
        },
    );

    loop {
        terminal.draw(|f| {
            let area = f.area();
            let [main, status, hints] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .areas(area);
            let [left, _, right] = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(48),
                    Constraint::Percentage(4),
                    Constraint::Percentage(48),
                ])
                .areas(main);

            let buf = f.buffer_mut();
            for (field, rect) in fields.iter_mut().zip([left, right]) {
                field
                    .view
                    .render(rect, buf, &theme, catalog, &field.selection);
            }

            let labels = |s: &Selection| {
                s.selected()
                    .iter()
                    .map(|o| o.label.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            let status_line = format!(
                "multiple=[{}]  single={}",
                labels(&fields[0].selection),
                labels(&fields[1].selection)
            );
            buf.set_span(
                status.x,
                status.y,
                &Span::styled(status_line, Style::default()),
                status.width,
            );
            help.render_ref(hints, buf);
        })?;

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        let ev = crossterm::event::read()?;
        if let Event::Key(key) = &ev {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Tab => {
                    let next = if fields[0].view.is_focused() { 1 } else { 0 };
                    fields[1 - next].view.set_focused(false);
                    fields[next].view.set_focused(true);
                    continue;
                }
                _ => {}
            }
        }

        let Some(input) = input_event_from_crossterm(ev) else {
            continue;
        };
        for field in fields.iter_mut() {
            if let SelectAction::Changed(next) =
                field
                    .view
                    .handle_event(input.clone(), catalog, &field.selection)
            {
                field.selection = next;
            }
        }
    }
}
