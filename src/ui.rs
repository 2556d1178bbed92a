use crate::models::{DashboardSummary, LeadershipView, SeatStatus};
use serde::Deserialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Consultant,
    Leadership,
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

fn heat_class(risk: i64) -> &'static str {
    match risk {
        r if r >= 50 => "heat-high",
        r if r >= 30 => "heat-mid",
        _ => "heat-low",
    }
}

pub fn render_consultant(title: &str, summary: &DashboardSummary) -> String {
    let metrics = &summary.strategic_summary;
    let mut cards = String::new();
    for (label, value) in [
        ("Seat Health Score", format!("{}%", metrics.seat_health_score)),
        ("Avg Booth Health Index", metrics.avg_booth_health_index.to_string()),
        ("Risk Zone Count", metrics.risk_zone_count.to_string()),
        ("Opportunity Zone Count", metrics.opportunity_zone_count.to_string()),
        ("Cadre Performance Index", format!("{}%", metrics.cadre_performance_index)),
        ("Turnout Sensitivity Score", metrics.turnout_sensitivity_score.to_string()),
    ] {
        let _ = write!(
            cards,
            r#"<div class="card"><span class="label">{label}</span><span class="value">{value}</span></div>"#
        );
    }

    let mut risk_rows = String::new();
    for row in &summary.high_risk_booths {
        let _ = write!(
            risk_rows,
            "<tr><td>{}</td><td>{}</td><td class=\"neg\">{}%</td><td>{}%</td><td>{}</td></tr>",
            escape_html(&row.booth),
            escape_html(&row.zone),
            row.swing,
            row.turnout,
            row.health
        );
    }

    let mut cluster_rows = String::new();
    for row in &summary.opportunity_clusters {
        let _ = write!(
            cluster_rows,
            "<tr><td>{}</td><td>{}</td><td class=\"pos\">{}%</td><td>{:?}</td></tr>",
            escape_html(&row.cluster),
            row.booths,
            signed(row.avg_swing),
            row.potential
        );
    }

    let mut trend_rows = String::new();
    for (swing, sentiment) in summary
        .swing_trend_data
        .iter()
        .zip(summary.sentiment_shift_data.iter())
    {
        let _ = write!(
            trend_rows,
            "<tr><td>{}</td><td>{}%</td><td>{}%</td><td>{} / {} / {}</td></tr>",
            escape_html(&swing.name),
            signed(swing.swing),
            signed(swing.projection),
            sentiment.favorable,
            sentiment.neutral,
            sentiment.unfavorable
        );
    }

    let mut grid = String::new();
    for row in &summary.risk_heat_grid_data {
        grid.push_str("<div class=\"grid-row\">");
        for risk in row {
            let _ = write!(grid, "<span class=\"cell {}\">{risk}</span>", heat_class(*risk));
        }
        grid.push_str("</div>");
    }

    CONSULTANT_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{TITLE}}", &escape_html(title))
        .replace("{{GENERATED}}", &escape_html(&summary.generated_at))
        .replace("{{CARDS}}", &cards)
        .replace("{{SUMMARY}}", &escape_html(&summary.ai_strategic_summary))
        .replace("{{TREND_ROWS}}", &trend_rows)
        .replace("{{GRID}}", &grid)
        .replace("{{RISK_ROWS}}", &risk_rows)
        .replace("{{CLUSTER_ROWS}}", &cluster_rows)
}

pub fn render_leadership(title: &str, view: &LeadershipView) -> String {
    let tone = match view.status {
        SeatStatus::GoodShape => "good",
        SeatStatus::NeedsAttention => "warn",
        SeatStatus::AtRisk => "bad",
    };
    let trend = if view.avg_swing >= 0.0 {
        format!("Swing is {}% in your favour", signed(view.avg_swing))
    } else {
        format!("Swing is {}% against you", view.avg_swing)
    };

    LEADERSHIP_HTML
        .replace("{{STYLE}}", STYLE)
        .replace("{{TITLE}}", &escape_html(title))
        .replace("{{TONE}}", tone)
        .replace("{{STATUS}}", view.status.label())
        .replace("{{HEALTH}}", &view.seat_health.to_string())
        .replace("{{RISK}}", &view.risk_booths.to_string())
        .replace("{{OPPORTUNITY}}", &view.opportunity_booths.to_string())
        .replace("{{TREND}}", &trend)
}

const STYLE: &str = r#"<style>
    :root {
      --ink: #111827;
      --muted: #6b7280;
      --line: #e5e7eb;
      --red: #dc2626;
      --amber: #d97706;
      --green: #16a34a;
      --blue: #2563eb;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: #f9fafb;
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
      padding: 24px;
    }

    main {
      max-width: 1280px;
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    nav a {
      color: var(--blue);
      margin-right: 12px;
      font-size: 0.9rem;
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .card,
    section {
      background: #fff;
      border: 1px solid var(--line);
      border-radius: 12px;
      padding: 16px 20px;
    }

    .label {
      display: block;
      color: var(--muted);
      font-size: 0.8rem;
      text-transform: uppercase;
    }

    .value {
      font-size: 1.8rem;
      font-weight: 600;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.9rem;
    }

    th,
    td {
      text-align: left;
      padding: 8px;
      border-bottom: 1px solid var(--line);
    }

    .neg {
      color: var(--red);
    }

    .pos {
      color: var(--green);
    }

    .grid-row {
      display: flex;
      gap: 4px;
      margin-bottom: 4px;
    }

    .cell {
      width: 40px;
      text-align: center;
      border-radius: 6px;
      padding: 6px 0;
      color: #fff;
    }

    .heat-low {
      background: var(--green);
    }

    .heat-mid {
      background: var(--amber);
    }

    .heat-high {
      background: var(--red);
    }

    .headline {
      text-align: center;
      font-size: 2.4rem;
    }

    .good {
      color: var(--green);
    }

    .warn {
      color: var(--amber);
    }

    .bad {
      color: var(--red);
    }
  </style>"#;

const CONSULTANT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}} · Consultant Dashboard</title>
  {{STYLE}}
</head>
<body>
  <main>
    <nav><a href="?mode=consultant">Consultant</a><a href="?mode=leadership">Leadership</a></nav>
    <header>
      <h1>{{TITLE}}</h1>
      <p class="label">Strategic analytics and booth-level intelligence · {{GENERATED}}</p>
    </header>
    <div class="cards">{{CARDS}}</div>
    <section>
      <h2>Strategic Summary</h2>
      <p>{{SUMMARY}}</p>
    </section>
    <section>
      <h2>Swing Trend &amp; Sentiment</h2>
      <table>
        <thead><tr><th>Period</th><th>Swing</th><th>Projection</th><th>Favorable / Neutral / Unfavorable</th></tr></thead>
        <tbody>{{TREND_ROWS}}</tbody>
      </table>
    </section>
    <section>
      <h2>Risk Heat Grid</h2>
      {{GRID}}
    </section>
    <section>
      <h2>High-Risk Booths</h2>
      <table>
        <thead><tr><th>Booth</th><th>Zone</th><th>Swing</th><th>Turnout</th><th>Health</th></tr></thead>
        <tbody>{{RISK_ROWS}}</tbody>
      </table>
    </section>
    <section>
      <h2>Opportunity Clusters</h2>
      <table>
        <thead><tr><th>Cluster</th><th>Booths</th><th>Avg Swing</th><th>Potential</th></tr></thead>
        <tbody>{{CLUSTER_ROWS}}</tbody>
      </table>
    </section>
  </main>
</body>
</html>
"#;

const LEADERSHIP_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}} · Your seat at a glance</title>
  {{STYLE}}
</head>
<body>
  <main>
    <nav><a href="?mode=consultant">Consultant</a><a href="?mode=leadership">Leadership</a></nav>
    <p class="label">{{TITLE}} · Your seat at a glance</p>
    <h1 class="headline">Your seat is in <span class="{{TONE}}">{{STATUS}}</span></h1>
    <div class="cards">
      <div class="card"><span class="label">Seat health score</span><span class="value {{TONE}}">{{HEALTH}}%</span></div>
    </div>
    <section>
      <span class="label bad">Watch out</span>
      <h2>{{RISK}} booths need your attention</h2>
      <p>Focus campaign efforts here to protect your margin.</p>
    </section>
    <section>
      <span class="label">Opportunity</span>
      <h2>{{OPPORTUNITY}} booths where you can gain</h2>
      <p>Best places to invest time and resources for more votes.</p>
    </section>
    <section>
      <span class="label">Trend</span>
      <h2>{{TREND}}</h2>
    </section>
  </main>
</body>
</html>
"#;
