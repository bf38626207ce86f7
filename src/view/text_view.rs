use crate::model::{Readout, Screen};

/// Plain-text rendering of one readout, captioned the way the kiosk screen is
pub fn render(readout: &Readout) -> String {
    let screen = readout.screen;
    let mut lines = vec![
        screen.title().to_string(),
        screen.subtitle().to_string(),
        String::new(),
    ];

    match screen {
        Screen::Clock => {
            lines.push("Here's what a computer sees:".into());
            lines.push(readout.binary.clone());
            lines.push("That's called binary! In our numbers, that's:".into());
            lines.push(readout.value.to_string());
            lines.push("That's the number of seconds since 1970. As a date:".into());
            lines.push(readout.calendar.clone());
        }
        Screen::Overflow => {
            lines.push("11111111 + 1 = 1 00000000".into());
            lines.push("Without room for the extra digit, a computer sees:".into());
            lines.push(readout.binary.clone());
            lines.push(readout.value.to_string());
            lines.push(readout.calendar.clone());
            lines.push("This will make some computers think 2038 is 1901.".into());
        }
        Screen::Wide => {
            lines.push("Here's what a computer sees now:".into());
            lines.push(readout.binary.clone());
            lines.push("In our numbers, that's:".into());
            lines.push(readout.value.to_string());
            lines.push("This number is about:".into());
            lines.push(readout.calendar.clone());
        }
    }

    lines.join("\n")
}

/// Single-line JSON rendering of one readout
pub fn render_json(readout: &Readout) -> serde_json::Result<String> {
    serde_json::to_string(readout)
}
