use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get the marble binary command
fn marble_cmd() -> Command {
    Command::cargo_bin("marble").unwrap()
}

mod inline {
    use super::*;

    #[test]
    fn bold_wraps_text() {
        marble_cmd()
            .args(["bold", "To go boldly"])
            .assert()
            .success()
            .stdout("**To go boldly**\n");
    }

    #[test]
    fn italics_alias_matches_italic() {
        marble_cmd()
            .args(["italics", "Emphasis"])
            .assert()
            .success()
            .stdout("*Emphasis*\n");
    }

    #[test]
    fn strike_wraps_text() {
        marble_cmd()
            .args(["strike", "Delete this nephew"])
            .assert()
            .success()
            .stdout("~~Delete this nephew~~\n");
    }

    #[test]
    fn link_and_image() {
        marble_cmd()
            .args(["link", "This repository", "https://github.com/biqqles/marble"])
            .assert()
            .success()
            .stdout("[This repository](https://github.com/biqqles/marble)\n");

        marble_cmd()
            .args(["image", "Alt text", "logo.png"])
            .assert()
            .success()
            .stdout("![Alt text](logo.png)\n");
    }
}

mod code {
    use super::*;

    #[test]
    fn inline_without_lang() {
        marble_cmd()
            .args(["code", "x"])
            .assert()
            .success()
            .stdout("`x`\n");
    }

    #[test]
    fn fenced_with_lang() {
        marble_cmd()
            .args(["code", "x", "--lang", "ruby"])
            .assert()
            .success()
            .stdout("```ruby\nx\n```\n");
    }

    #[test]
    fn empty_lang_is_still_fenced() {
        marble_cmd()
            .args(["code", "x", "--lang", ""])
            .assert()
            .success()
            .stdout("```\nx\n```\n");
    }

    #[test]
    fn reads_code_from_stdin() {
        marble_cmd()
            .args(["code", "-", "-l", "rust"])
            .write_stdin("fn main() {}\n")
            .assert()
            .success()
            .stdout("```rust\nfn main() {}\n```\n");
    }
}

mod escaping {
    use super::*;

    #[test]
    fn escape_subcommand() {
        marble_cmd()
            .args(["escape", "#RubyGems"])
            .assert()
            .success()
            .stdout("\\#RubyGems\n");
    }

    #[test]
    fn escape_flag_applies_before_formatting() {
        marble_cmd()
            .args(["--escape", "bold", "Marble!"])
            .assert()
            .success()
            .stdout("**Marble\\!**\n");
    }

    #[test]
    fn escape_flag_leaves_url_alone() {
        marble_cmd()
            .args(["-e", "link", "#RubyGems", "https://rubygems.org/"])
            .assert()
            .success()
            .stdout("[\\#RubyGems](https://rubygems.org/)\n");
    }

    #[test]
    fn escape_subcommand_ignores_flag() {
        marble_cmd()
            .args(["-e", "escape", "a_b"])
            .assert()
            .success()
            .stdout("a\\_b\n");
    }
}

mod blocks {
    use super::*;

    #[test]
    fn ordered_list_keeps_single_trailing_newline() {
        marble_cmd()
            .args(["ol", "one", "two"])
            .assert()
            .success()
            .stdout("1.   one\n2.   two\n");
    }

    #[test]
    fn ordered_list_with_start() {
        marble_cmd()
            .args(["ol", "--start", "5", "a", "b"])
            .assert()
            .success()
            .stdout("5.   a\n6.   b\n");
    }

    #[test]
    fn ordered_list_with_largest_start() {
        let start = usize::MAX.to_string();
        let past = usize::MAX as u128 + 1;
        marble_cmd()
            .args(["ol", "--start", start.as_str(), "a", "b"])
            .assert()
            .success()
            .stdout(format!("{start}.   a\n{past}.   b\n"));
    }

    #[test]
    fn unordered_list_escapes_items() {
        marble_cmd()
            .args(["-e", "ul", "*a*", "b"])
            .assert()
            .success()
            .stdout("-   \\*a\\*\n-   b\n");
    }

    #[test]
    fn list_requires_items() {
        marble_cmd().arg("ul").assert().failure();
    }

    #[test]
    fn horizontal_rule() {
        marble_cmd().arg("hr").assert().success().stdout("---\n");
    }

    #[test]
    fn quote_from_stdin() {
        marble_cmd()
            .arg("quote")
            .write_stdin("Quotable\n")
            .assert()
            .success()
            .stdout("> Quotable\n");
    }
}

mod headers {
    use super::*;

    #[test]
    fn defaults_to_level_one() {
        marble_cmd()
            .args(["header", "Title"])
            .assert()
            .success()
            .stdout("# Title\n");
    }

    #[test]
    fn level_six() {
        marble_cmd()
            .args(["header", "--level", "6", "Title"])
            .assert()
            .success()
            .stdout("###### Title\n");
    }

    #[test]
    fn invalid_level_is_an_error() {
        marble_cmd()
            .args(["header", "-l", "7", "Title"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid header level 7"));
    }
}

mod help {
    use super::*;

    #[test]
    fn help_lists_subcommands() {
        marble_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("bold").and(predicate::str::contains("header")));
    }

    #[test]
    fn version_flag() {
        marble_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("marble "));
    }
}
