//! Keeps spawned helper processes from flashing a console window on Windows.

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

pub trait HideWindow {
    fn hide_window(&mut self) -> &mut Self;
}

impl HideWindow for tokio::process::Command {
    #[cfg(windows)]
    fn hide_window(&mut self) -> &mut Self {
        self.creation_flags(CREATE_NO_WINDOW)
    }

    #[cfg(not(windows))]
    fn hide_window(&mut self) -> &mut Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::HideWindow;

    #[test]
    fn hide_window_keeps_builder_chain_intact() {
        let mut cmd = tokio::process::Command::new("bash");
        cmd.hide_window().arg("-c").arg("true");

        let std_cmd = cmd.as_std();
        assert_eq!(std_cmd.get_program(), "bash");
        assert_eq!(std_cmd.get_args().count(), 2);
    }
}
