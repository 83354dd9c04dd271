//! Verlauf ausgeführter Commands mit fortlaufender Nummer.

use super::AppCommand;
use std::collections::VecDeque;

/// Ringpuffer der zuletzt ausgeführten Commands.
///
/// Jeder Eintrag trägt eine fortlaufende Nummer, die auch nach dem Verwerfen
/// alter Einträge eindeutig bleibt.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<(u64, AppCommand)>,
    next_sequence: u64,
}

impl CommandLog {
    const CAPACITY: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen Command an und gibt seine Nummer zurück.
    pub fn record(&mut self, command: AppCommand) -> u64 {
        if self.entries.len() == Self::CAPACITY {
            self.entries.pop_front();
        }
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.entries.push_back((sequence, command));
        sequence
    }

    /// Anzahl gehaltener Einträge
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Anzahl aller jemals aufgezeichneten Commands
    pub fn total_recorded(&self) -> u64 {
        self.next_sequence
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back().map(|(_, command)| command)
    }

    /// Die letzten `count` Commands, neueste zuerst.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter().rev().take(count).map(|(_, command)| command)
    }

    /// Commands mit einer Nummer ab `sequence` in Ausführungsreihenfolge.
    ///
    /// Für Beobachter, die nur neue Schritte nachziehen wollen.
    pub fn since(&self, sequence: u64) -> impl Iterator<Item = &AppCommand> {
        self.entries
            .iter()
            .skip_while(move |(seq, _)| *seq < sequence)
            .map(|(_, command)| command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_log_drops_only_the_oldest_entry() {
        let mut log = CommandLog::new();
        log.record(AppCommand::Bootstrap);
        for _ in 1..CommandLog::CAPACITY {
            log.record(AppCommand::ClearSelection);
        }
        let last = log.record(AppCommand::ClearAll);

        assert_eq!(log.len(), CommandLog::CAPACITY);
        assert_eq!(last, CommandLog::CAPACITY as u64);
        assert_eq!(log.total_recorded(), CommandLog::CAPACITY as u64 + 1);
        assert!(!log
            .recent(CommandLog::CAPACITY)
            .any(|c| matches!(c, AppCommand::Bootstrap)));
        assert!(matches!(log.last(), Some(AppCommand::ClearAll)));
    }

    #[test]
    fn since_returns_commands_from_sequence_on() {
        let mut log = CommandLog::new();
        log.record(AppCommand::Bootstrap);
        let mark = log.record(AppCommand::ClearSelection);
        log.record(AppCommand::DeleteSelectedPanels);

        let newer: Vec<&AppCommand> = log.since(mark).collect();
        assert_eq!(newer.len(), 2);
        assert!(matches!(newer[0], AppCommand::ClearSelection));
        assert!(matches!(newer[1], AppCommand::DeleteSelectedPanels));
        assert_eq!(log.since(99).count(), 0);
    }
}
