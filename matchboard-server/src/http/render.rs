//! Leaderboard HTML rendering.
//!
//! The page is a single ranked table; nothing here warrants a template
//! engine, so the markup is built directly with player names HTML-escaped.

use std::fmt::Write;

use crate::db::repos::LeaderboardRow;

/// Render the leaderboard page for `GET /`.
pub fn leaderboard_page(rows: &[LeaderboardRow]) -> String {
    let mut body = String::with_capacity(2048);

    body.push_str(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Matchboard</title>\n\
         <style>\n\
         body { font-family: sans-serif; margin: 2rem auto; max-width: 48rem; }\n\
         table { border-collapse: collapse; width: 100%; }\n\
         th, td { border-bottom: 1px solid #ccc; padding: 0.4rem 0.8rem; text-align: left; }\n\
         td.num { text-align: right; }\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <h1>Leaderboard</h1>\n\
         <table>\n\
         <tr><th>#</th><th>Player</th><th>Score</th><th>Played</th>\
         <th>Won</th><th>Tied</th><th>Lost</th></tr>\n",
    );

    for (rank, row) in rows.iter().enumerate() {
        let _ = write!(
            body,
            "<tr><td class=\"num\">{}</td><td>{}</td><td class=\"num\">{}</td>\
             <td class=\"num\">{}</td><td class=\"num\">{}</td>\
             <td class=\"num\">{}</td><td class=\"num\">{}</td></tr>\n",
            rank + 1,
            escape(&row.player_name),
            row.score,
            row.matches_played,
            row.matches_won,
            row.matches_tied,
            row.matches_lost,
        );
    }

    body.push_str("</table>\n</body>\n</html>\n");
    body
}

/// Minimal HTML escaping for text content.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, won: i32, lost: i32, tied: i32) -> LeaderboardRow {
        LeaderboardRow {
            player_name: name.to_string(),
            score: won * 2 + tied,
            matches_played: won + lost + tied,
            matches_won: won,
            matches_tied: tied,
            matches_lost: lost,
        }
    }

    #[test]
    fn page_lists_players_in_given_order() {
        let rows = vec![row("Aella, the Steadfast", 3, 0, 1), row("Nero, the Shadow", 1, 2, 0)];
        let page = leaderboard_page(&rows);

        let first = page.find("Aella, the Steadfast").unwrap();
        let second = page.find("Nero, the Shadow").unwrap();
        assert!(first < second);
        assert!(page.contains("<td class=\"num\">7</td>"));
    }

    #[test]
    fn player_names_are_escaped() {
        let rows = vec![row("<script>alert(1)</script>", 0, 0, 0)];
        let page = leaderboard_page(&rows);

        assert!(!page.contains("<script>alert"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn empty_leaderboard_still_renders() {
        let page = leaderboard_page(&[]);
        assert!(page.contains("<h1>Leaderboard</h1>"));
    }
}
