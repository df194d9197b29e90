/*
 * Copyright (c) 2024 Project CHIP Authors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! General application clusters (on/off, level, grouping, labels...).

clusters! {
    Identify = 0x0003 {
        attributes {
            0x0000 => IdentifyTime,
            0x0001 => IdentifyType,
        }
        events {}
        commands {
            0x00 => Identify,
            0x40 => TriggerEffect,
        }
    }

    Groups = 0x0004 {
        attributes {
            0x0000 => NameSupport,
        }
        events {}
        commands {
            0x00 => AddGroup,
            0x01 => ViewGroup,
            0x02 => GetGroupMembership,
            0x03 => RemoveGroup,
            0x04 => RemoveAllGroups,
            0x05 => AddGroupIfIdentifying,
        }
    }

    Scenes = 0x0005 {
        attributes {
            0x0000 => SceneCount,
            0x0001 => CurrentScene,
            0x0002 => CurrentGroup,
            0x0003 => SceneValid,
            0x0004 => NameSupport,
            0x0005 => LastConfiguredBy,
            0x0006 => SceneTableSize,
            0x0007 => RemainingCapacity,
        }
        events {}
        commands {
            0x00 => AddScene,
            0x01 => ViewScene,
            0x02 => RemoveScene,
            0x03 => RemoveAllScenes,
            0x04 => StoreScene,
            0x05 => RecallScene,
            0x06 => GetSceneMembership,
            0x40 => EnhancedAddScene,
            0x41 => EnhancedViewScene,
            0x42 => CopyScene,
        }
    }

    OnOff = 0x0006 {
        attributes {
            0x0000 => OnOff,
            0x4000 => GlobalSceneControl,
            0x4001 => OnTime,
            0x4002 => OffWaitTime,
            0x4003 => StartUpOnOff,
        }
        events {}
        commands {
            0x00 => Off,
            0x01 => On,
            0x02 => Toggle,
            0x40 => OffWithEffect,
            0x41 => OnWithRecallGlobalScene,
            0x42 => OnWithTimedOff,
        }
    }

    OnOffSwitchConfiguration = 0x0007 {
        attributes {
            0x0000 => SwitchType,
            0x0010 => SwitchActions,
        }
        events {}
        commands {}
    }

    LevelControl = 0x0008 {
        attributes {
            0x0000 => CurrentLevel,
            0x0001 => RemainingTime,
            0x0002 => MinLevel,
            0x0003 => MaxLevel,
            0x0004 => CurrentFrequency,
            0x0005 => MinFrequency,
            0x0006 => MaxFrequency,
            0x000F => Options,
            0x0010 => OnOffTransitionTime,
            0x0011 => OnLevel,
            0x0012 => OnTransitionTime,
            0x0013 => OffTransitionTime,
            0x0014 => DefaultMoveRate,
            0x4000 => StartUpCurrentLevel,
        }
        events {}
        commands {
            0x00 => MoveToLevel,
            0x01 => Move,
            0x02 => Step,
            0x03 => Stop,
            0x04 => MoveToLevelWithOnOff,
            0x05 => MoveWithOnOff,
            0x06 => StepWithOnOff,
            0x07 => StopWithOnOff,
            0x08 => MoveToClosestFrequency,
        }
    }

    BinaryInputBasic = 0x000F {
        attributes {
            0x0004 => ActiveText,
            0x001C => Description,
            0x002E => InactiveText,
            0x0051 => OutOfService,
            0x0054 => Polarity,
            0x0055 => PresentValue,
            0x0067 => Reliability,
            0x006F => StatusFlags,
            0x0100 => ApplicationType,
        }
        events {}
        commands {}
    }

    PulseWidthModulation = 0x001C {
        attributes {}
        events {}
        commands {}
    }

    Descriptor = 0x001D {
        attributes {
            0x0000 => DeviceTypeList,
            0x0001 => ServerList,
            0x0002 => ClientList,
            0x0003 => PartsList,
            0x0004 => TagList,
        }
        events {}
        commands {}
    }

    Binding = 0x001E {
        attributes {
            0x0000 => Binding,
        }
        events {}
        commands {}
    }

    Actions = 0x0025 {
        attributes {
            0x0000 => ActionList,
            0x0001 => EndpointLists,
            0x0002 => SetupURL,
        }
        events {
            0x00 => StateChanged,
            0x01 => ActionFailed,
        }
        commands {
            0x00 => InstantAction,
            0x01 => InstantActionWithTransition,
            0x02 => StartAction,
            0x03 => StartActionWithDuration,
            0x04 => StopAction,
            0x05 => PauseAction,
            0x06 => PauseActionWithDuration,
            0x07 => ResumeAction,
            0x08 => EnableAction,
            0x09 => EnableActionWithDuration,
            0x0A => DisableAction,
            0x0B => DisableActionWithDuration,
        }
    }

    Switch = 0x003B {
        attributes {
            0x0000 => NumberOfPositions,
            0x0001 => CurrentPosition,
            0x0002 => MultiPressMax,
        }
        events {
            0x00 => SwitchLatched,
            0x01 => InitialPress,
            0x02 => LongPress,
            0x03 => ShortRelease,
            0x04 => LongRelease,
            0x05 => MultiPressOngoing,
            0x06 => MultiPressComplete,
        }
        commands {}
    }

    FixedLabel = 0x0040 {
        attributes {
            0x0000 => LabelList,
        }
        events {}
        commands {}
    }

    UserLabel = 0x0041 {
        attributes {
            0x0000 => LabelList,
        }
        events {}
        commands {}
    }

    BooleanState = 0x0045 {
        attributes {
            0x0000 => StateValue,
        }
        events {
            0x00 => StateChange,
        }
        commands {}
    }

    ModeSelect = 0x0050 {
        attributes {
            0x0000 => Description,
            0x0001 => StandardNamespace,
            0x0002 => SupportedModes,
            0x0003 => CurrentMode,
            0x0004 => StartUpMode,
            0x0005 => OnMode,
        }
        events {}
        commands {
            0x00 => ChangeToMode,
        }
    }
}
