use colored::*;

use crate::terminal::print;

const ART: &str = r#"
       _                      _ _
 _ __ | |_ _ ____      ____ _| | | __
| '_ \| __| '__\ \ /\ / / _` | | |/ /
| |_) | |_| |   \ V  V / (_| | |   <
| .__/ \__|_|    \_/\_/ \__,_|_|_|\_\
|_|
"#;

pub fn print() {
    for line in ART.lines().skip(1) {
        print::centerln(&format!("{}", line.bright_green().bold()));
    }
}
