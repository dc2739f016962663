use crate::models::{Filter, Habit};
use crate::relative::habit_message;
use crate::store::HabitStore;
use chrono::{DateTime, Utc};

pub fn render_index(store: &HabitStore, now: DateTime<Utc>) -> String {
    let progress = store.progress().to_string();
    INDEX_HTML
        .replace("{{PROGRESS}}", &progress)
        .replace("{{FILTERS}}", &render_filters(store.filter()))
        .replace("{{ROWS}}", &render_rows(&store.visible(), now))
}

fn render_filters(active: Filter) -> String {
    Filter::ALL
        .iter()
        .map(|filter| {
            let class = if *filter == active { " selectedButton" } else { "" };
            format!(
                r#"<form method="post" action="/filter/{value}"><button class="tab{class}" type="submit">{label}</button></form>"#,
                value = filter.as_str(),
                label = filter.label(),
            )
        })
        .collect()
}

fn render_rows(habits: &[&Habit], now: DateTime<Utc>) -> String {
    if habits.is_empty() {
        return r#"<tr><td class="empty" colspan="3">No habits here yet</td></tr>"#.to_string();
    }

    habits
        .iter()
        .map(|habit| render_row(habit, now))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_row(habit: &Habit, now: DateTime<Utc>) -> String {
    let (name_class, toggle_class, toggle_label) = if habit.completed {
        ("name completed", "updateButton redButton", "Undo")
    } else {
        ("name", "updateButton", "Done")
    };

    format!(
        r#"<tr>
          <th><span class="{name_class}">{name}</span></th>
          <td><span class="dateTask">{message}</span></td>
          <td class="row-actions">
            <form method="post" action="/habits/{id}/toggle"><button class="{toggle_class}" type="submit">{toggle_label}</button></form>
            <form method="post" action="/habits/{id}/delete"><button class="updateButton redButton" type="submit">Delete</button></form>
          </td>
        </tr>"#,
        name = escape_html(&habit.name),
        message = escape_html(&habit_message(habit, now)),
        id = habit.id,
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>HabitTracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .version {
      margin: 0;
      color: #8b857d;
      font-size: 0.9rem;
      letter-spacing: 0.12em;
    }

    .progressBar {
      background: rgba(47, 72, 88, 0.1);
      border-radius: 999px;
      height: 28px;
      overflow: hidden;
    }

    .progressFill {
      background: var(--accent);
      color: white;
      height: 100%;
      min-width: 3em;
      border-radius: 999px;
      font-weight: 600;
      font-size: 0.85rem;
      display: flex;
      align-items: center;
      justify-content: center;
    }

    .caption {
      margin: -12px 0 0;
      color: #8b857d;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
    }

    form {
      margin: 0;
    }

    .add-form {
      display: flex;
      gap: 10px;
      flex-wrap: wrap;
    }

    .add-form input {
      flex: 1 1 220px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 999px;
      padding: 14px 18px;
      font: inherit;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
    }

    .addButton {
      background: var(--accent);
      color: white;
    }

    .clearButton {
      background: var(--accent-2);
      color: white;
    }

    .filter {
      display: flex;
      gap: 6px;
      padding: 6px;
      width: fit-content;
      background: rgba(47, 72, 88, 0.08);
      border-radius: 999px;
    }

    .tab {
      background: transparent;
      padding: 8px 14px;
      font-size: 0.9rem;
      color: #6b645d;
    }

    .tab.selectedButton {
      background: white;
      color: var(--accent-2);
      box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12);
    }

    table {
      width: 100%;
      border-collapse: collapse;
      background: white;
      border-radius: 20px;
      overflow: hidden;
    }

    th, td {
      text-align: left;
      padding: 12px 16px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
    }

    thead th {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .completed {
      text-decoration: line-through;
    }

    .dateTask {
      color: #6b645d;
      font-size: 0.9rem;
    }

    .row-actions {
      display: flex;
      gap: 8px;
    }

    .updateButton {
      padding: 8px 14px;
      font-size: 0.85rem;
      background: var(--accent-2);
      color: white;
    }

    .redButton {
      background: #c63b2b;
    }

    .empty {
      color: #8b857d;
      text-align: center;
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .row-actions {
        flex-direction: column;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>HabitTracker</h1>
      <h2 class="version">V 2.0</h2>
    </header>

    <div class="progressBar">
      <div class="progressFill" id="progress" style="width: {{PROGRESS}}%">{{PROGRESS}}%</div>
    </div>
    <h3 class="caption">Progression bar</h3>

    <div class="add-form">
      <form class="add-form" method="post" action="/habits">
        <input type="text" name="name" placeholder="insert your habit" autocomplete="off" />
        <button class="addButton" type="submit">Add habit</button>
      </form>
      <form method="post" action="/habits/clear">
        <button class="clearButton" type="submit">Clear all</button>
      </form>
    </div>

    <nav class="filter">
      {{FILTERS}}
    </nav>

    <div class="list">
      <table>
        <thead>
          <tr>
            <th>Habit</th>
            <th>Date</th>
            <th>Status</th>
          </tr>
        </thead>
        <tbody>
        {{ROWS}}
        </tbody>
      </table>
    </div>
  </main>
</body>
</html>
"#;
