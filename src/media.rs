use log::{debug, error, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlMediaElement, HtmlVideoElement};

pub const CAN_PLAY_EVENT: &str = "canplay";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MediaError {
    #[error("error playing {label}: {reason}")]
    PlaybackRejected { label: &'static str, reason: String },
    #[error("{label} refused to start: {reason}")]
    PlaybackUnavailable { label: &'static str, reason: String },
    #[error("could not listen for {event} on {label}: {reason}")]
    Listener {
        label: &'static str,
        event: &'static str,
        reason: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackAttempt {
    Requested,
    Skipped,
}

pub trait MediaElement: Clone + 'static {
    type Listener;

    fn is_attached(&self) -> bool;

    fn request_playback(&self, label: &'static str);

    fn halt_playback(&self, label: &'static str);

    fn listen_can_play(
        &self,
        label: &'static str,
        handler: Box<dyn FnMut()>,
    ) -> Result<Self::Listener, MediaError>;

    fn unlisten_can_play(&self, label: &'static str, listener: Self::Listener);
}

pub fn try_autoplay<M: MediaElement>(media: &M, label: &'static str) -> PlaybackAttempt {
    if !media.is_attached() {
        debug!("{} is no longer in the document, not starting playback", label);
        return PlaybackAttempt::Skipped;
    }
    media.request_playback(label);
    PlaybackAttempt::Requested
}

pub struct VideoAutoplay<M: MediaElement> {
    media: M,
    label: &'static str,
    listener: Option<M::Listener>,
}

impl<M: MediaElement> VideoAutoplay<M> {
    pub fn attach(media: M, label: &'static str) -> Result<Self, MediaError> {
        let target = media.clone();
        let listener = media.listen_can_play(
            label,
            Box::new(move || {
                try_autoplay(&target, label);
            }),
        )?;
        debug!("listening for {} on {}", CAN_PLAY_EVENT, label);
        Ok(Self {
            media,
            label,
            listener: Some(listener),
        })
    }
}

impl<M: MediaElement> Drop for VideoAutoplay<M> {
    fn drop(&mut self) {
        if let Some(listener) = self.listener.take() {
            self.media.unlisten_can_play(self.label, listener);
        }
        self.media.halt_playback(self.label);
        debug!("released {}", self.label);
    }
}

fn describe(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

impl MediaElement for HtmlVideoElement {
    type Listener = Closure<dyn FnMut()>;

    fn is_attached(&self) -> bool {
        self.is_connected()
    }

    fn request_playback(&self, label: &'static str) {
        match HtmlMediaElement::play(self) {
            Ok(promise) => spawn_local(async move {
                if let Err(reason) = JsFuture::from(promise).await {
                    let err = MediaError::PlaybackRejected {
                        label,
                        reason: describe(&reason),
                    };
                    error!("{}", err);
                }
            }),
            Err(reason) => {
                let err = MediaError::PlaybackUnavailable {
                    label,
                    reason: describe(&reason),
                };
                error!("{}", err);
            }
        }
    }

    fn halt_playback(&self, label: &'static str) {
        if let Err(reason) = HtmlMediaElement::pause(self) {
            warn!("could not pause {}: {}", label, describe(&reason));
        }
    }

    fn listen_can_play(
        &self,
        label: &'static str,
        handler: Box<dyn FnMut()>,
    ) -> Result<Self::Listener, MediaError> {
        let callback = Closure::wrap(handler);
        self.add_event_listener_with_callback(CAN_PLAY_EVENT, callback.as_ref().unchecked_ref())
            .map_err(|reason| MediaError::Listener {
                label,
                event: CAN_PLAY_EVENT,
                reason: describe(&reason),
            })?;
        Ok(callback)
    }

    fn unlisten_can_play(&self, label: &'static str, listener: Self::Listener) {
        if let Err(reason) = self
            .remove_event_listener_with_callback(CAN_PLAY_EVENT, listener.as_ref().unchecked_ref())
        {
            warn!("could not remove {} listener from {}: {}", CAN_PLAY_EVENT, label, describe(&reason));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeState {
        attached: bool,
        play_requests: usize,
        pauses: usize,
        listeners: Vec<Option<Box<dyn FnMut()>>>,
        removed: usize,
        refuse_listener: bool,
    }

    #[derive(Clone, Default)]
    struct FakeVideo(Rc<RefCell<FakeState>>);

    impl FakeVideo {
        fn attached() -> Self {
            let video = FakeVideo::default();
            video.0.borrow_mut().attached = true;
            video
        }

        fn detach(&self) {
            self.0.borrow_mut().attached = false;
        }

        fn fire_can_play(&self) {
            let mut listeners = std::mem::take(&mut self.0.borrow_mut().listeners);
            for handler in listeners.iter_mut().flatten() {
                handler();
            }
            self.0.borrow_mut().listeners = listeners;
        }

        fn live_listeners(&self) -> usize {
            self.0.borrow().listeners.iter().filter(|l| l.is_some()).count()
        }

        fn play_requests(&self) -> usize {
            self.0.borrow().play_requests
        }

        fn pauses(&self) -> usize {
            self.0.borrow().pauses
        }
    }

    impl MediaElement for FakeVideo {
        type Listener = usize;

        fn is_attached(&self) -> bool {
            self.0.borrow().attached
        }

        fn request_playback(&self, _label: &'static str) {
            self.0.borrow_mut().play_requests += 1;
        }

        fn halt_playback(&self, _label: &'static str) {
            self.0.borrow_mut().pauses += 1;
        }

        fn listen_can_play(
            &self,
            label: &'static str,
            handler: Box<dyn FnMut()>,
        ) -> Result<usize, MediaError> {
            let mut state = self.0.borrow_mut();
            if state.refuse_listener {
                return Err(MediaError::Listener {
                    label,
                    event: CAN_PLAY_EVENT,
                    reason: "refused".to_string(),
                });
            }
            state.listeners.push(Some(handler));
            Ok(state.listeners.len() - 1)
        }

        fn unlisten_can_play(&self, _label: &'static str, listener: usize) {
            let mut state = self.0.borrow_mut();
            if let Some(slot) = state.listeners.get_mut(listener) {
                if slot.take().is_some() {
                    state.removed += 1;
                }
            }
        }
    }

    #[test]
    fn plays_when_ready_and_attached() {
        let video = FakeVideo::attached();
        let _guard = VideoAutoplay::attach(video.clone(), "video").unwrap();

        video.fire_can_play();
        assert_eq!(video.play_requests(), 1);
    }

    #[test]
    fn detached_video_is_never_played() {
        let video = FakeVideo::attached();
        let _guard = VideoAutoplay::attach(video.clone(), "video").unwrap();

        video.detach();
        video.fire_can_play();
        assert_eq!(video.play_requests(), 0);
        assert_eq!(try_autoplay(&video, "video"), PlaybackAttempt::Skipped);
    }

    #[test]
    fn each_ready_event_is_a_fresh_attempt() {
        let video = FakeVideo::attached();
        let _guard = VideoAutoplay::attach(video.clone(), "video").unwrap();

        video.fire_can_play();
        video.fire_can_play();
        assert_eq!(video.play_requests(), 2);
        assert_eq!(video.pauses(), 0);
    }

    #[test]
    fn unmount_releases_both_videos() {
        let hero = FakeVideo::attached();
        let nomination = FakeVideo::attached();
        let guards = vec![
            VideoAutoplay::attach(hero.clone(), "video").unwrap(),
            VideoAutoplay::attach(nomination.clone(), "second video").unwrap(),
        ];
        assert_eq!(hero.live_listeners(), 1);
        assert_eq!(nomination.live_listeners(), 1);

        drop(guards);

        for video in [&hero, &nomination] {
            assert_eq!(video.live_listeners(), 0);
            assert_eq!(video.0.borrow().removed, 1);
            assert_eq!(video.pauses(), 1);
            video.fire_can_play();
            assert_eq!(video.play_requests(), 0);
        }
    }

    #[test]
    fn listener_failure_is_reported() {
        let video = FakeVideo::attached();
        video.0.borrow_mut().refuse_listener = true;

        let err = VideoAutoplay::attach(video.clone(), "video").err();
        assert_eq!(
            err.map(|e| e.to_string()).as_deref(),
            Some("could not listen for canplay on video: refused")
        );
        assert_eq!(video.pauses(), 0);
    }

    #[test]
    fn rejection_message_names_the_video() {
        let err = MediaError::PlaybackRejected {
            label: "second video",
            reason: "NotAllowedError".to_string(),
        };
        assert_eq!(err.to_string(), "error playing second video: NotAllowedError");
    }
}
