//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::route_guard::RouteGuard;
use crate::components::toast_host::ToastHost;
use crate::net::types::Role;
use crate::pages::{
    browse_subjects::BrowseSubjectsPage, home::HomePage, login::LoginPage, register::RegisterPage,
    student_dashboard::StudentDashboardPage, student_subject_details::StudentSubjectDetailsPage,
    subject_details::SubjectDetailsPage, submit_solution::SubmitSolutionPage, task_solutions::TaskSolutionsPage,
    teacher_dashboard::TeacherDashboardPage,
};
use crate::state::{auth::AuthState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts, restores a stored session in the
/// browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restoring());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::util::session::restore(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/lms.css"/>
        <Title text="LMS"/>

        <Router>
            <ToastHost/>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=|| view! { <RouteGuard><HomePage/></RouteGuard> }/>

                <Route
                    path=StaticSegment("teacher")
                    view=|| view! { <RouteGuard area=Role::Teacher><TeacherDashboardPage/></RouteGuard> }
                />
                <Route
                    path=(StaticSegment("teacher"), StaticSegment("subjects"), ParamSegment("id"))
                    view=|| view! { <RouteGuard area=Role::Teacher><SubjectDetailsPage/></RouteGuard> }
                />
                <Route
                    path=(StaticSegment("teacher"), StaticSegment("tasks"), ParamSegment("id"))
                    view=|| view! { <RouteGuard area=Role::Teacher><TaskSolutionsPage/></RouteGuard> }
                />

                <Route
                    path=StaticSegment("student")
                    view=|| view! { <RouteGuard area=Role::Student><StudentDashboardPage/></RouteGuard> }
                />
                <Route
                    path=(StaticSegment("student"), StaticSegment("subjects"), StaticSegment("browse"))
                    view=|| view! { <RouteGuard area=Role::Student><BrowseSubjectsPage/></RouteGuard> }
                />
                <Route
                    path=(StaticSegment("student"), StaticSegment("subjects"), ParamSegment("id"))
                    view=|| view! { <RouteGuard area=Role::Student><StudentSubjectDetailsPage/></RouteGuard> }
                />
                <Route
                    path=(StaticSegment("student"), StaticSegment("tasks"), ParamSegment("id"))
                    view=|| view! { <RouteGuard area=Role::Student><SubmitSolutionPage/></RouteGuard> }
                />
            </Routes>
        </Router>
    }
}
