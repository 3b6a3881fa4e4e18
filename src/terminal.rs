// Copyright (c) 2026 rezky_nightky

use std::io::{stdout, Result, Stdout, Write};

use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, ExecutableCommand,
};

pub struct Terminal {
    stdout: Stdout,
    size: (u16, u16),
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let size = terminal::size()?;
        let mut out = stdout();
        let init_res: Result<()> = (|| {
            out.execute(cursor::Hide)?;
            out.execute(terminal::Clear(terminal::ClearType::All))?;
            out.flush()?;
            Ok(())
        })();
        if let Err(e) = init_res {
            let _ = out.execute(cursor::Show);
            let _ = out.flush();
            return Err(e);
        }
        Ok(Self { stdout: out, size })
    }

    // Size queries after startup are best-effort: on failure the last
    // known size is reused.
    pub fn poll_size(&mut self) -> (u16, u16) {
        if let Ok(size) = terminal::size() {
            self.size = size;
        }
        self.size
    }

    pub fn clear(&mut self) -> Result<()> {
        self.stdout
            .execute(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    pub fn writer(&mut self) -> &mut Stdout {
        &mut self.stdout
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self
            .stdout
            .execute(terminal::Clear(terminal::ClearType::All));
        let _ = self.stdout.execute(cursor::MoveTo(0, 0));
        let _ = self.stdout.execute(SetAttribute(Attribute::Reset));
        let _ = self.stdout.execute(ResetColor);
        let _ = self.stdout.execute(cursor::Show);
        let _ = self.stdout.flush();
    }
}

pub fn restore_terminal_best_effort() {
    let mut out = stdout();
    let _ = out.execute(SetAttribute(Attribute::Reset));
    let _ = out.execute(ResetColor);
    let _ = out.execute(cursor::Show);
    let _ = out.flush();
}
