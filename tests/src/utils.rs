use std::collections::{BTreeSet, HashMap};
use std::net::IpAddr;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use netkit_common::DiscoveryError;
use netkit_core::exec::{CommandOutput, CommandRunner};
use netkit_core::probe::Prober;

/// Stands in for the OS tools.
///
/// `ping` succeeds only for the addresses in `alive`; every other program
/// answers with the stdout registered for it, or fails to spawn.
#[derive(Default)]
pub struct ScriptedRunner {
    pub alive: BTreeSet<IpAddr>,
    pub outputs: HashMap<&'static str, CommandOutput>,
    pub calls: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn with_alive<I: IntoIterator<Item = &'static str>>(alive: I) -> Self {
        Self {
            alive: alive.into_iter().map(|a| a.parse().unwrap()).collect(),
            ..Default::default()
        }
    }

    pub fn answer(mut self, program: &'static str, code: i32, stdout: &str) -> Self {
        self.outputs.insert(
            program,
            CommandOutput {
                code: Some(code),
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        );
        self
    }

    pub fn call_count(&self, program: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|argv| argv.split(' ').next() == Some(program))
            .count()
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, DiscoveryError> {
        let mut argv = vec![program];
        argv.extend_from_slice(args);
        self.calls.lock().unwrap().push(argv.join(" "));

        if program.starts_with("ping") {
            let target: Option<IpAddr> = args.last().and_then(|a| a.parse().ok());
            let reachable = target.is_some_and(|t| self.alive.contains(&t));
            return Ok(CommandOutput {
                code: Some(if reachable { 0 } else { 1 }),
                ..Default::default()
            });
        }

        self.outputs
            .get(program)
            .cloned()
            .ok_or_else(|| DiscoveryError::Spawn {
                program: program.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not scripted"),
            })
    }
}

/// Records the highest number of overlapping probes.
#[derive(Default)]
pub struct CountingProber {
    pub in_flight: AtomicUsize,
    pub peak: AtomicUsize,
    pub calls: AtomicUsize,
}

impl CountingProber {
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Prober for CountingProber {
    async fn probe(&self, _addr: IpAddr) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(1)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        false
    }
}
