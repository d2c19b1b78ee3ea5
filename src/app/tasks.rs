//! Cola de tareas diferidas, medidas con el reloj de la UI.
//!
//! Sustituye a los `setTimeout` sueltos: toda tarea pendiente es un dato que el
//! controlador puede cancelar, así que nada se ejecuta tras un reset.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredTask {
    /// Avance automático tras elegir opción en la pregunta `from`.
    AutoAdvance { from: usize },
    ClearMessage,
    /// Fin de la latencia simulada del envío del lead.
    CompleteSubmission,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due: f64,
    seq: u64,
    task: DeferredTask,
}

#[derive(Debug, Default)]
pub struct TaskQueue {
    entries: Vec<Scheduled>,
    next_seq: u64,
}

impl TaskQueue {
    pub fn schedule(&mut self, due: f64, task: DeferredTask) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Scheduled { due, seq, task });
    }

    /// Cancela las tareas que cumplan `pred`. Devuelve cuántas se quitaron.
    pub fn cancel(&mut self, pred: impl Fn(&DeferredTask) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|s| !pred(&s.task));
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Saca las tareas vencidas en `now`, por orden de vencimiento y de alta.
    pub fn take_due(&mut self, now: f64) -> Vec<DeferredTask> {
        let (mut due, pending): (Vec<Scheduled>, Vec<Scheduled>) =
            self.entries.drain(..).partition(|s| s.due <= now);
        self.entries = pending;
        due.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|s| s.task).collect()
    }

    pub fn next_due(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(|s| s.due)
            .min_by(|a, b| a.total_cmp(b))
    }

    pub fn contains(&self, pred: impl Fn(&DeferredTask) -> bool) -> bool {
        self.entries.iter().any(|s| pred(&s.task))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
