use comfy_table::{presets::UTF8_HORIZONTAL_ONLY, Table};

use crate::domain::tally::AuthorStats;
use crate::utils::fmt_epoch;

pub fn render(authors: &[AuthorStats]) -> String {
    let mut t = Table::new();
    t.load_preset(UTF8_HORIZONTAL_ONLY)
        .set_header(vec!["Name", "Email", "Added", "Removed", "Latest Commit"]);
    for a in authors {
        t.add_row(vec![
            a.name.clone(),
            a.email.clone(),
            a.added.to_string(),
            a.removed.to_string(),
            fmt_epoch(a.latest_commit),
        ]);
    }
    t.to_string()
}

pub fn print_emails(authors: &[AuthorStats]) {
    for a in authors {
        println!("{}", a.email);
    }
}
