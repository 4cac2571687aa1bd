// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The container state machine. Every method here is a synchronous,
//! non-blocking transition — no I/O, no locks. [`crate::actor`] is the only
//! thing that ever calls these from outside tests, and it calls them from a
//! single task, which is what makes the zero-lock property hold.

use std::collections::{HashMap, HashSet, VecDeque};

use warden_core::{
    AssistantInfo, Command, ContainerInfo, ContainerState, ExitInfo, InvalidOperation,
    ManagerResponse, Tag,
};

/// The manager's authoritative container tables.
#[derive(Debug, Default)]
pub struct ManagerState {
    containers: HashMap<Tag, ContainerInfo>,
    assistants: HashMap<Tag, AssistantInfo>,
    runnable: VecDeque<Tag>,
    running: HashSet<Tag>,
}

impl ManagerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_container(&mut self, tag: Tag) -> Result<(), InvalidOperation> {
        if self.containers.contains_key(&tag) {
            return Err(InvalidOperation::tag_exists(&tag));
        }
        self.containers.insert(tag.clone(), ContainerInfo::new(tag));
        Ok(())
    }

    pub fn start_container(&mut self, tag: Tag, command: Command) -> Result<(), InvalidOperation> {
        let info = self.containers.get(&tag).ok_or_else(|| InvalidOperation::tag_unknown(&tag))?;
        if info.state != ContainerState::Ready {
            return Err(InvalidOperation::wrong_state(&tag, "ready", info.state));
        }
        self.assistants.insert(tag.clone(), AssistantInfo::new(tag.clone(), command));
        self.runnable.push_back(tag);
        Ok(())
    }

    pub fn stop_container(&mut self, tag: &Tag) -> Result<(), InvalidOperation> {
        let info = self.containers.get_mut(tag).ok_or_else(|| InvalidOperation::tag_unknown(tag))?;
        match info.state {
            ContainerState::Running | ContainerState::Stopping => {
                info.state = ContainerState::Stopping;
                Ok(())
            }
            other => Err(InvalidOperation::wrong_state(tag, "running or stopping", other)),
        }
    }

    pub fn delete_container(&mut self, tag: &Tag) -> Result<(), InvalidOperation> {
        let info = self.containers.get(tag).ok_or_else(|| InvalidOperation::tag_unknown(tag))?;
        match info.state {
            ContainerState::Ready | ContainerState::Dead => {
                self.containers.remove(tag);
                self.assistants.remove(tag);
                Ok(())
            }
            other => Err(InvalidOperation::wrong_state(tag, "ready or dead", other)),
        }
    }

    pub fn list_containers(
        &self,
        tags: Option<&[Tag]>,
    ) -> Result<Vec<ContainerInfo>, InvalidOperation> {
        match tags {
            None => Ok(self.containers.values().cloned().collect()),
            Some(requested) if requested.is_empty() => {
                Ok(self.containers.values().cloned().collect())
            }
            Some(requested) => requested
                .iter()
                .map(|tag| {
                    self.containers
                        .get(tag)
                        .cloned()
                        .ok_or_else(|| InvalidOperation::tag_unknown(tag))
                })
                .collect(),
        }
    }

    /// Drain and return the runnable queue, FIFO.
    pub fn dequeue_ready_containers(&mut self) -> Vec<Tag> {
        self.runnable.drain(..).collect()
    }

    pub fn get_assistant_manager_status(&self, tag: &Tag) -> Option<AssistantInfo> {
        self.assistants.get(tag).cloned()
    }

    pub fn get_running_containers(&self) -> Vec<Tag> {
        self.running.iter().cloned().collect()
    }

    /// Apply an agent's status report and return the directive it should act on.
    #[allow(clippy::too_many_arguments)]
    pub fn report_container_status(
        &mut self,
        tag: &Tag,
        state: ContainerState,
        pid: u32,
        workload_pid: u32,
        cgroup_path: String,
        exit_info: Option<ExitInfo>,
    ) -> ManagerResponse {
        let Some(info) = self.containers.get_mut(tag) else {
            return ManagerResponse::Abort;
        };

        match (info.state, state) {
            (ContainerState::Ready, ContainerState::Running) => {
                info.state = ContainerState::Running;
                self.running.insert(tag.clone());
                if let Some(assistant) = self.assistants.get_mut(tag) {
                    assistant.pid = pid;
                    assistant.workload_pid = workload_pid;
                    assistant.cgroup_path = cgroup_path;
                }
            }
            (ContainerState::Running, ContainerState::Dead)
            | (ContainerState::Stopping, ContainerState::Dead) => {
                info.state = ContainerState::Dead;
                info.exit_info = exit_info;
                // `remove` is a no-op (not an error) if the tag was never
                // inserted — e.g. a container that dies before its first
                // RUNNING report.
                self.running.remove(tag);
            }
            _ => {}
        }

        if info.state == ContainerState::Stopping {
            ManagerResponse::Stop
        } else {
            ManagerResponse::Okay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd() -> Command {
        Command::new("/bin/echo", vec!["hi".to_string()])
    }

    #[test]
    fn s1_natural_exit_without_executor() {
        let mut s = ManagerState::new();
        let tag = Tag::from("one");
        s.create_container(tag.clone()).unwrap();
        s.start_container(tag.clone(), cmd()).unwrap();

        assert_eq!(s.dequeue_ready_containers(), vec![tag.clone()]);
        assert!(s.dequeue_ready_containers().is_empty());

        let directive =
            s.report_container_status(&tag, ContainerState::Running, 10, 20, String::new(), None);
        assert_eq!(directive, ManagerResponse::Okay);
        assert_eq!(s.list_containers(Some(&[tag.clone()])).unwrap()[0].state, ContainerState::Running);
        assert!(s.get_running_containers().contains(&tag));

        let directive = s.report_container_status(
            &tag,
            ContainerState::Dead,
            10,
            20,
            String::new(),
            Some(ExitInfo::from_raw(0)),
        );
        assert_eq!(directive, ManagerResponse::Okay);
        assert_eq!(s.list_containers(Some(&[tag.clone()])).unwrap()[0].state, ContainerState::Dead);
        assert!(!s.get_running_containers().contains(&tag));

        s.delete_container(&tag).unwrap();
        assert!(s.list_containers(Some(&[tag])).is_err());
    }

    #[test]
    fn s2_user_induced_stop() {
        let mut s = ManagerState::new();
        let tag = Tag::from("two");
        s.create_container(tag.clone()).unwrap();
        s.start_container(tag.clone(), cmd()).unwrap();
        s.dequeue_ready_containers();
        s.report_container_status(&tag, ContainerState::Running, 1, 2, String::new(), None);

        s.stop_container(&tag).unwrap();
        assert_eq!(s.list_containers(None).unwrap()[0].state, ContainerState::Stopping);
        assert!(s.delete_container(&tag).is_err());

        let directive =
            s.report_container_status(&tag, ContainerState::Running, 1, 2, String::new(), None);
        assert_eq!(directive, ManagerResponse::Stop);

        let directive = s.report_container_status(
            &tag,
            ContainerState::Dead,
            1,
            2,
            String::new(),
            Some(ExitInfo::from_raw(0)),
        );
        assert_eq!(directive, ManagerResponse::Okay);
        assert_eq!(s.list_containers(None).unwrap()[0].state, ContainerState::Dead);
    }

    #[test]
    fn s3_rogue_agent_is_aborted() {
        let mut s = ManagerState::new();
        let directive = s.report_container_status(
            &Tag::from("ghost"),
            ContainerState::Running,
            1,
            2,
            String::new(),
            None,
        );
        assert_eq!(directive, ManagerResponse::Abort);
    }

    #[test]
    fn s6_start_rejected_for_non_ready() {
        let mut s = ManagerState::new();
        let tag = Tag::from("dead-one");
        s.create_container(tag.clone()).unwrap();
        s.start_container(tag.clone(), cmd()).unwrap();
        s.report_container_status(&tag, ContainerState::Running, 1, 2, String::new(), None);
        s.report_container_status(
            &tag,
            ContainerState::Dead,
            1,
            2,
            String::new(),
            Some(ExitInfo::from_raw(0)),
        );
        assert!(s.start_container(tag.clone(), cmd()).is_err());
        assert_eq!(s.list_containers(Some(&[tag])).unwrap()[0].state, ContainerState::Dead);
    }

    #[test]
    fn duplicate_create_is_rejected() {
        let mut s = ManagerState::new();
        s.create_container(Tag::from("one")).unwrap();
        assert!(s.create_container(Tag::from("one")).is_err());
    }

    #[test]
    fn stop_is_idempotent_while_stopping() {
        let mut s = ManagerState::new();
        let tag = Tag::from("one");
        s.create_container(tag.clone()).unwrap();
        s.start_container(tag.clone(), cmd()).unwrap();
        s.report_container_status(&tag, ContainerState::Running, 1, 2, String::new(), None);
        s.stop_container(&tag).unwrap();
        s.stop_container(&tag).unwrap();
        assert_eq!(s.list_containers(None).unwrap()[0].state, ContainerState::Stopping);
    }

    #[test]
    fn reporting_dead_twice_does_not_resurrect_or_error() {
        let mut s = ManagerState::new();
        let tag = Tag::from("one");
        s.create_container(tag.clone()).unwrap();
        s.start_container(tag.clone(), cmd()).unwrap();
        s.report_container_status(&tag, ContainerState::Running, 1, 2, String::new(), None);
        s.report_container_status(
            &tag,
            ContainerState::Dead,
            1,
            2,
            String::new(),
            Some(ExitInfo::from_raw(0)),
        );
        let directive = s.report_container_status(
            &tag,
            ContainerState::Dead,
            1,
            2,
            String::new(),
            Some(ExitInfo::from_raw(1)),
        );
        assert_eq!(directive, ManagerResponse::Okay);
        // Second report must not overwrite the first exit info or re-add to
        // the running set.
        assert_eq!(
            s.list_containers(Some(&[tag.clone()])).unwrap()[0].exit_info,
            Some(ExitInfo::from_raw(0))
        );
        assert!(!s.get_running_containers().contains(&tag));
    }

    #[test]
    fn dead_report_before_any_running_report_does_not_panic_on_running_set_removal() {
        let mut s = ManagerState::new();
        let tag = Tag::from("one");
        s.create_container(tag.clone()).unwrap();
        s.start_container(tag.clone(), cmd()).unwrap();
        // No RUNNING report ever happened; state is still READY.
        let directive = s.report_container_status(
            &tag,
            ContainerState::Dead,
            0,
            0,
            String::new(),
            Some(ExitInfo::from_raw(1)),
        );
        assert_eq!(directive, ManagerResponse::Okay);
        // READY -> DEAD isn't in the transition table, so state is unchanged.
        assert_eq!(s.list_containers(Some(&[tag])).unwrap()[0].state, ContainerState::Ready);
    }

    #[test]
    fn dequeue_is_fifo_and_destructive() {
        let mut s = ManagerState::new();
        for t in ["a", "b", "c"] {
            let tag = Tag::from(t);
            s.create_container(tag.clone()).unwrap();
            s.start_container(tag, cmd()).unwrap();
        }
        assert_eq!(
            s.dequeue_ready_containers(),
            vec![Tag::from("a"), Tag::from("b"), Tag::from("c")]
        );
        assert!(s.dequeue_ready_containers().is_empty());
    }

    #[test]
    fn delete_rejected_while_running_or_stopping() {
        let mut s = ManagerState::new();
        let tag = Tag::from("one");
        s.create_container(tag.clone()).unwrap();
        s.start_container(tag.clone(), cmd()).unwrap();
        s.report_container_status(&tag, ContainerState::Running, 1, 2, String::new(), None);
        assert!(s.delete_container(&tag).is_err());
        s.stop_container(&tag).unwrap();
        assert!(s.delete_container(&tag).is_err());
    }

    #[test]
    fn list_all_with_no_tags_filter() {
        let mut s = ManagerState::new();
        s.create_container(Tag::from("a")).unwrap();
        s.create_container(Tag::from("b")).unwrap();
        assert_eq!(s.list_containers(None).unwrap().len(), 2);
        assert_eq!(s.list_containers(Some(&[])).unwrap().len(), 2);
    }

    #[test]
    fn list_unknown_tag_is_rejected() {
        let s = ManagerState::new();
        assert!(s.list_containers(Some(&[Tag::from("nope")])).is_err());
    }
}
