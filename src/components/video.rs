use log::error;
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::media::VideoAutoplay;

#[derive(Properties, PartialEq)]
pub struct BackgroundVideoProps {
    pub src: AttrValue,
    pub label: &'static str,
    #[prop_or_default]
    pub overlay: Classes,
}

#[function_component(BackgroundVideo)]
pub fn background_video(props: &BackgroundVideoProps) -> Html {
    let video_ref = use_node_ref();

    {
        let video_ref = video_ref.clone();
        let label = props.label;
        use_effect_with_deps(
            move |_| {
                let autoplay = video_ref.cast::<HtmlVideoElement>().and_then(|video| {
                    // The attribute alone does not mute an element created from script.
                    video.set_muted(true);
                    VideoAutoplay::attach(video, label)
                        .map_err(|err| error!("{}", err))
                        .ok()
                });

                move || drop(autoplay)
            },
            (),
        );
    }

    html! {
        <div class="background-video">
            <video
                ref={video_ref}
                autoplay=true
                loop=true
                muted=true
                playsinline=true
                preload="auto"
            >
                <source src={props.src.clone()} type="video/mp4" />
            </video>
            <div class={classes!("video-overlay", props.overlay.clone())}></div>
        </div>
    }
}
