//! Terminal output for the `song-recommender` binary.

use clap::builder::styling::{AnsiColor, Color, Style};
use clap::builder::Styles;
use crossterm::style::{Color as TermColor, Stylize};
use unicode_width::UnicodeWidthStr;

use song_recommender::{Catalogue, Recommendation, Song};

const ACCENT: TermColor = TermColor::Rgb {
    r: 0,
    g: 200,
    b: 220,
};
const GOOD: TermColor = TermColor::Rgb {
    r: 0,
    g: 220,
    b: 130,
};
const BAD: TermColor = TermColor::Rgb {
    r: 240,
    g: 80,
    b: 80,
};
const MUTED: TermColor = TermColor::Rgb {
    r: 128,
    g: 128,
    b: 128,
};

const RULE_WIDTH: usize = 56;

pub fn get_styles() -> Styles {
    let accent = Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));
    let bad = Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Red)));
    Styles::styled()
        .usage(accent.underline())
        .header(accent.underline())
        .literal(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Green))))
        .invalid(bad)
        .error(bad)
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))))
}

pub fn print_success(message: &str) {
    println!(" {} {}", "✓".with(GOOD).bold(), message.with(GOOD));
}

pub fn print_error(message: &str) {
    println!(" {} {}", "✗".with(BAD).bold(), message.with(BAD));
}

/// `"1. Title - Artist (similarity: 0.97)"`, `position` counts from zero.
pub fn recommendation_line(position: usize, recommendation: &Recommendation) -> String {
    format!(
        "{}. {} - {} (similarity: {:.2})",
        position + 1,
        recommendation.song.name,
        recommendation.song.artist,
        recommendation.similarity
    )
}

fn rule(title: &str) -> String {
    format!(
        "── {} {}",
        title,
        "─".repeat(RULE_WIDTH.saturating_sub(title.width() + 4))
    )
}

pub fn print_recommendations(seed: &Song, k: usize, recommendations: &[Recommendation]) {
    println!();
    println!(
        "  {} {}",
        "Seed Song:".with(ACCENT).bold(),
        format!("{} - {}", seed.name, seed.artist).with(GOOD).bold()
    );
    println!("{}", rule(&format!("Top {} Similar Songs", k)).with(ACCENT));
    if recommendations.is_empty() {
        println!("   {}", "No other songs to recommend".with(MUTED).italic());
    }
    for (position, recommendation) in recommendations.iter().enumerate() {
        println!("   {}", recommendation_line(position, recommendation));
    }
    println!("{}", "─".repeat(RULE_WIDTH).with(ACCENT));
}

/// Catalogue listing as aligned `ID | Track | Artist` lines, header first.
pub fn song_table(catalogue: &Catalogue) -> Vec<String> {
    let ids: Vec<String> = catalogue.songs().iter().map(|s| s.id.to_string()).collect();

    let id_width = ids.iter().map(|id| id.width()).chain([2]).max().unwrap_or(2);
    let name_width = catalogue
        .songs()
        .iter()
        .map(|s| s.name.width())
        .chain([5])
        .max()
        .unwrap_or(5);

    let line = |id: &str, name: &str, artist: &str| {
        format!(
            "{}{} | {}{} | {}",
            " ".repeat(id_width - id.width()),
            id,
            name,
            " ".repeat(name_width - name.width()),
            artist
        )
    };

    let mut lines = vec![line("ID", "Track", "Artist")];
    for (id, song) in ids.iter().zip(catalogue.songs()) {
        lines.push(line(id, &song.name, &song.artist));
    }
    lines
}

pub fn print_songs(catalogue: &Catalogue) {
    let lines = song_table(catalogue);
    if let Some((header, rows)) = lines.split_first() {
        println!("{}", header.clone().with(ACCENT).bold());
        println!("{}", "─".repeat(header.width()).with(ACCENT));
        for row in rows {
            println!("{}", row);
        }
    }
    println!(
        "  {}",
        format!("{} songs", catalogue.len()).with(MUTED).bold()
    );
    println!();
}
