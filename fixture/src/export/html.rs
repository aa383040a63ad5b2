//! Standalone printable HTML document.

use std::fmt::Write;

use chrono::{DateTime, Local, TimeZone};

use super::rows::rows;
use crate::schedule::Fixture;

const STYLE: &str = "\
  :root { --bg:#0b0c0f; --card:#151823; --text:#e8eaf1; --muted:#9aa4b2; --rest:#ffd166; }
  html,body { background: var(--bg); color: var(--text); font-family: system-ui, -apple-system, Segoe UI, Roboto, Ubuntu, Cantarell, 'Helvetica Neue', Arial; margin:0; padding:0; }
  .wrap { max-width: 1100px; margin: 32px auto; padding: 0 16px; }
  h1 { font-size: 22px; font-weight: 650; margin: 0 0 12px; }
  .meta { color: var(--muted); margin-bottom: 16px; }
  .card { background: var(--card); border-radius: 12px; padding: 16px; box-shadow: 0 10px 30px rgba(0,0,0,.25); }
  table { border-collapse: collapse; width: 100%; font-size: 14px; }
  thead th { text-align: left; font-weight: 600; color: var(--muted); padding: 10px 12px; border-bottom: 1px solid rgba(255,255,255,.08); position: sticky; top:0; background: var(--card); }
  tbody td { padding: 10px 12px; border-bottom: 1px solid rgba(255,255,255,.06); }
  tbody tr:hover { background: rgba(255,255,255,.03); }
  .pill { display: inline-block; padding: 2px 8px; border-radius: 999px; font-size: 12px; font-weight: 600; color: #000; }
  .pill-rest { background: var(--rest); }
  .footer { color: var(--muted); font-size: 12px; margin-top: 12px; }
  .actions { display:flex; gap:10px; margin-bottom:12px; }
  .btn { display:inline-block; border:1px solid rgba(255,255,255,.12); padding:8px 10px; border-radius:8px; text-decoration:none; color:var(--text); }
  .btn:hover { background: rgba(255,255,255,.06); }
  @media print { .actions { display:none; } }
";

/// Render the fixture as a standalone HTML page stamped with `generated_at`
pub fn to_html<Tz>(fixture: &Fixture, generated_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let n = fixture.participant_count();
    let stamp = generated_at.format("%Y-%m-%d %H:%M");
    let mut out = String::with_capacity(4096 + fixture.len() * 96);

    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang='es'>");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "<meta charset='utf-8'>");
    let _ = writeln!(
        out,
        "<meta name='viewport' content='width=device-width, initial-scale=1'>"
    );
    let _ = writeln!(out, "<title>Fixture Brisca ({n} equipos)</title>");
    let _ = writeln!(out, "<style>\n{STYLE}</style>");
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "<div class='wrap'>");
    let _ = writeln!(out, "  <h1>Fixture de Brisca</h1>");
    let _ = writeln!(
        out,
        "  <div class='meta'>Participantes: <strong>{n}</strong> &middot; {} &middot; \
         Round-robin (método del círculo). Generado {stamp}.</div>",
        leg_description(fixture)
    );
    let _ = writeln!(out, "  <div class='card'>");
    let _ = writeln!(out, "    <div class='actions'>");
    let _ = writeln!(
        out,
        "      <a class='btn' href='#' onclick='window.print()'>Imprimir / Guardar PDF</a>"
    );
    let _ = writeln!(out, "    </div>");
    let _ = writeln!(out, "    <table>");
    let _ = writeln!(out, "      <thead>");
    let _ = writeln!(
        out,
        "        <tr><th>Ronda</th><th>Mesa</th><th>Local</th><th>Visita</th><th>Nota</th></tr>"
    );
    let _ = writeln!(out, "      </thead>");
    let _ = writeln!(out, "      <tbody>");

    for row in rows(fixture) {
        if row.is_bye() {
            let _ = writeln!(
                out,
                "        <tr class='rest'><td>{}</td><td>{}</td><td>{}</td><td></td>\
                 <td><span class='pill pill-rest'>{}</span></td></tr>",
                row.round,
                row.table,
                html_escape(row.home),
                html_escape(row.note)
            );
        } else {
            let _ = writeln!(
                out,
                "        <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td></td></tr>",
                row.round,
                row.table,
                html_escape(row.home),
                html_escape(row.away)
            );
        }
    }

    let _ = writeln!(out, "      </tbody>");
    let _ = writeln!(out, "    </table>");
    let _ = writeln!(out, "  </div>");
    let _ = writeln!(
        out,
        "  <div class='footer'>Generado automáticamente &middot; Todas las mesas por ronda \
         se pueden jugar en simultáneo.</div>"
    );
    let _ = writeln!(out, "</div>");
    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");

    out
}

/// Render with the current local time as generation stamp
pub fn to_html_now(fixture: &Fixture) -> String {
    to_html(fixture, &Local::now())
}

fn leg_description(fixture: &Fixture) -> String {
    let (rounds, tables) = (fixture.total_rounds(), fixture.tables_per_round());
    let legs = if fixture.is_double_round() {
        "ida y vuelta"
    } else {
        "solo ida"
    };
    format!("{rounds} rondas de {tables} mesas, {legs}")
}

fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
