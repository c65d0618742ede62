//! 终端渲染适配器
//!
//! 把 `View` 画到输出流，并从输入流读取用户选择。
//! 输入流结束（EOF）视为退出。

use crate::workflow::{Choice, Control, View};
use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;

/// 超过这个数量的量表只显示两端
const MAX_LISTED_BUTTONS: i64 = 11;

enum Input {
    Line(String),
    /// 不是合法 UTF-8
    Garbled,
    Eof,
}

pub struct TerminalUi<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalUi<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// 画出视图
    pub fn draw(&mut self, view: &View) -> io::Result<()> {
        match view {
            View::Question {
                number,
                total,
                label,
                control,
            } => {
                writeln!(self.output, "\n[{}/{}] {}", number, total, label)?;
                match control {
                    Control::Likert { scale } if scale.is_empty() => {
                        writeln!(self.output, "  (没有可选项)")?;
                    }
                    Control::Likert { scale } => {
                        writeln!(self.output, "  {}", buttons(scale))?;
                        write!(self.output, "请输入数字并回车: ")?;
                    }
                    Control::FreeText => {
                        write!(self.output, "请输入文字并回车: ")?;
                    }
                }
            }
            View::Failed {
                number,
                total,
                label,
                reason,
                retryable,
            } => {
                writeln!(self.output, "\n[{}/{}] {}", number, total, label)?;
                writeln!(self.output, "❌ 提交失败: {}", reason)?;
                if *retryable {
                    write!(self.output, "输入 retry 重试，skip 跳过: ")?;
                } else {
                    write!(self.output, "输入 skip 跳过: ")?;
                }
            }
            View::Completion {
                export_url,
                answered,
                skipped,
            } => {
                writeln!(self.output, "\n✅ 问卷已完成，感谢参与！")?;
                writeln!(self.output, "已提交 {} 题，跳过 {} 题", answered, skipped)?;
                writeln!(self.output, "导出数据: {}", export_url)?;
            }
        }
        self.output.flush()
    }

    /// 读取当前视图上的一次有效选择
    ///
    /// 无效输入会提示后重新读取。
    pub fn read_choice(&mut self, view: &View) -> io::Result<Choice> {
        loop {
            let line = match self.read_input()? {
                Input::Line(line) => line,
                Input::Eof => return Ok(Choice::Quit),
                Input::Garbled => {
                    write!(self.output, "无法识别的输入（非 UTF-8），请重新输入: ")?;
                    self.output.flush()?;
                    continue;
                }
            };

            if let Some(choice) = parse_choice(view, &line) {
                return Ok(choice);
            }

            match view {
                View::Question {
                    control: Control::Likert { scale },
                    ..
                } if scale.is_empty() => {
                    writeln!(self.output, "此题没有可选项")?;
                }
                View::Question {
                    control: Control::Likert { scale },
                    ..
                } => {
                    write!(
                        self.output,
                        "无效的选项，请输入 {} 到 {} 之间的整数: ",
                        scale.start(),
                        scale.end()
                    )?;
                }
                View::Failed { retryable, .. } => {
                    if *retryable {
                        write!(self.output, "请输入 retry 或 skip: ")?;
                    } else {
                        write!(self.output, "请输入 skip: ")?;
                    }
                }
                View::Question { .. } | View::Completion { .. } => {}
            }
            self.output.flush()?;
        }
    }

    fn read_input(&mut self) -> io::Result<Input> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(Input::Eof);
        }
        Ok(match String::from_utf8(raw) {
            Ok(line) => Input::Line(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(_) => Input::Garbled,
        })
    }
}

/// 量表按钮行；区间过宽时只显示两端
fn buttons(scale: &RangeInclusive<i64>) -> String {
    let count = scale.end().checked_sub(*scale.start());
    match count {
        Some(span) if span < MAX_LISTED_BUTTONS => scale
            .clone()
            .map(|v| format!("[{}]", v))
            .collect::<Vec<_>>()
            .join(" "),
        _ => format!("[{}] ... [{}]", scale.start(), scale.end()),
    }
}

/// 按视图解析一行输入
fn parse_choice(view: &View, line: &str) -> Option<Choice> {
    match view {
        View::Question {
            control: Control::Likert { scale },
            ..
        } => line
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|v| scale.contains(v))
            .map(Choice::Scale),
        View::Question {
            control: Control::FreeText,
            ..
        } => Some(Choice::Text(line.to_string())),
        View::Failed { retryable, .. } => match line.trim().to_lowercase().as_str() {
            "retry" | "r" if *retryable => Some(Choice::Retry),
            "skip" | "s" => Some(Choice::Skip),
            _ => None,
        },
        View::Completion { .. } => Some(Choice::Quit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn likert_view() -> View {
        View::Question {
            number: 2,
            total: 7,
            label: "Is it realistic?".to_string(),
            control: Control::Likert { scale: 1..=5 },
        }
    }

    fn ui(input: &str) -> TerminalUi<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalUi::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(ui: TerminalUi<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(ui.into_inner().1).unwrap()
    }

    #[test]
    fn test_draw_likert_buttons() {
        let mut ui = ui("");
        ui.draw(&likert_view()).unwrap();

        let out = output_of(ui);
        assert!(out.contains("[2/7] Is it realistic?"));
        assert!(out.contains("[1] [2] [3] [4] [5]"));
    }

    #[test]
    fn test_invalid_option_is_reprompted() {
        let mut ui = ui("9\nabc\n4\n");
        let choice = ui.read_choice(&likert_view()).unwrap();

        assert_eq!(choice, Choice::Scale(4));
        assert_eq!(output_of(ui).matches("无效的选项").count(), 2);
    }

    #[test]
    fn test_wide_scale_shows_ends_and_checks_bounds() {
        let view = View::Question {
            number: 1,
            total: 1,
            label: "Pick".to_string(),
            control: Control::Likert {
                scale: 0..=1_000_000_000_000,
            },
        };
        let mut ui = ui("-1\n1000000000001\n999999999999\n");
        ui.draw(&view).unwrap();

        assert_eq!(ui.read_choice(&view).unwrap(), Choice::Scale(999_999_999_999));
        let out = output_of(ui);
        assert!(out.contains("[0] ... [1000000000000]"));
        assert_eq!(out.matches("无效的选项").count(), 2);
    }

    #[test]
    fn test_eleven_point_scale_lists_every_button() {
        let mut ui = ui("");
        ui.draw(&View::Question {
            number: 1,
            total: 1,
            label: "NPS".to_string(),
            control: Control::Likert { scale: 0..=10 },
        })
        .unwrap();

        assert!(output_of(ui).contains("[0] [1] [2] [3] [4] [5] [6] [7] [8] [9] [10]"));
    }

    #[test]
    fn test_non_utf8_line_is_reprompted() {
        let mut ui = TerminalUi::new(Cursor::new(b"\xff\xfe\n4\n".to_vec()), Vec::new());

        assert_eq!(ui.read_choice(&likert_view()).unwrap(), Choice::Scale(4));
        assert!(output_of(ui).contains("非 UTF-8"));
    }

    #[test]
    fn test_free_text_line_passed_through() {
        let view = View::Question {
            number: 1,
            total: 1,
            label: "Ideas?".to_string(),
            control: Control::FreeText,
        };
        let mut ui = ui("  hello  \r\n");

        assert_eq!(
            ui.read_choice(&view).unwrap(),
            Choice::Text("  hello  ".to_string())
        );
    }

    #[test]
    fn test_eof_means_quit() {
        let mut ui = ui("");
        assert_eq!(ui.read_choice(&likert_view()).unwrap(), Choice::Quit);
    }

    #[test]
    fn test_empty_scale_accepts_nothing() {
        let view = View::Question {
            number: 1,
            total: 1,
            label: "Broken".to_string(),
            control: Control::Likert { scale: 5..=1 },
        };
        let mut ui = ui("1\n5\n");

        assert_eq!(ui.read_choice(&view).unwrap(), Choice::Quit);
        assert_eq!(output_of(ui).matches("此题没有可选项").count(), 2);
    }

    #[test]
    fn test_failed_view_without_retry() {
        let view = View::Failed {
            number: 1,
            total: 3,
            label: "A".to_string(),
            reason: "HTTP 422".to_string(),
            retryable: false,
        };
        let mut ui = ui("retry\nskip\n");

        assert_eq!(ui.read_choice(&view).unwrap(), Choice::Skip);
    }

    #[test]
    fn test_draw_completion_shows_export_link() {
        let mut ui = ui("");
        ui.draw(&View::Completion {
            export_url: "http://localhost:8000/feedback/export.csv".to_string(),
            answered: 6,
            skipped: 1,
        })
        .unwrap();

        let out = output_of(ui);
        assert!(out.contains("问卷已完成"));
        assert!(out.contains("http://localhost:8000/feedback/export.csv"));
        assert!(out.contains("已提交 6 题，跳过 1 题"));
    }
}
